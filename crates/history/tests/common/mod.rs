//! In-memory editor host shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use folio_history::{EntityNotifier, NodeTree, SnapshotHost};
use folio_primitives::{EntityState, EntityStateRequest, EntityStateUpdate, SelectionDescriptor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Installs a test subscriber once per process.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Ordered record of collaborator calls, shared between host and notifier.
pub type CallLog = Rc<RefCell<Vec<String>>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
	#[error("serialization failed")]
	Serialize,
	#[error("malformed content: {0}")]
	Parse(String),
	#[error("selection target missing")]
	Selection,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeSpec {
	tag: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	children: Vec<NodeSpec>,
}

#[derive(Debug)]
struct NodeData {
	tag: String,
	parent: Option<usize>,
	children: Vec<usize>,
}

/// Arena-backed document tree with a fixed physical root at node 0.
///
/// Deserializing allocates fresh nodes, so handles taken before a restore
/// become detached.
#[derive(Debug)]
pub struct MemoryEditor {
	nodes: Vec<NodeData>,
	logical_root: usize,
	pub shadow_editing: bool,
	pub dark_mode: bool,
	pub selection: Option<SelectionDescriptor>,
	/// Appends a `norm` child to the logical root on selection capture.
	pub normalize_on_capture: bool,
	pub fail_serialize: bool,
	pub fail_apply_selection: bool,
	pub log: CallLog,
}

impl MemoryEditor {
	pub const PHYSICAL_ROOT: usize = 0;

	pub fn new(log: CallLog) -> Self {
		Self {
			nodes: vec![NodeData {
				tag: "root".into(),
				parent: None,
				children: Vec::new(),
			}],
			logical_root: Self::PHYSICAL_ROOT,
			shadow_editing: false,
			dark_mode: false,
			selection: None,
			normalize_on_capture: false,
			fail_serialize: false,
			fail_apply_selection: false,
			log,
		}
	}

	pub fn append(&mut self, parent: usize, tag: &str) -> usize {
		let id = self.nodes.len();
		self.nodes.push(NodeData {
			tag: tag.into(),
			parent: Some(parent),
			children: Vec::new(),
		});
		self.nodes[parent].children.push(id);
		id
	}

	pub fn focus(&mut self, node: usize) {
		self.logical_root = node;
	}

	pub fn logical_root_node(&self) -> usize {
		self.logical_root
	}

	pub fn tag(&self, node: usize) -> &str {
		&self.nodes[node].tag
	}

	/// Tags of the children of `node`, in order.
	pub fn child_tags(&self, node: usize) -> Vec<String> {
		self.nodes[node]
			.children
			.iter()
			.map(|&c| self.nodes[c].tag.clone())
			.collect()
	}

	/// Replaces the whole document with `tags` as children of the physical root.
	pub fn type_blocks(&mut self, tags: &[&str]) {
		self.nodes[Self::PHYSICAL_ROOT].children.clear();
		for tag in tags {
			self.append(Self::PHYSICAL_ROOT, tag);
		}
		self.logical_root = Self::PHYSICAL_ROOT;
	}

	fn record(&self, call: impl Into<String>) {
		self.log.borrow_mut().push(call.into());
	}

	fn spec(&self, node: usize) -> NodeSpec {
		NodeSpec {
			tag: self.nodes[node].tag.clone(),
			children: self.nodes[node].children.iter().map(|&c| self.spec(c)).collect(),
		}
	}

	fn build(&mut self, parent: usize, spec: NodeSpec) {
		let id = self.append(parent, &spec.tag);
		for child in spec.children {
			self.build(id, child);
		}
	}
}

impl NodeTree for MemoryEditor {
	type Node = usize;

	fn parent(&self, node: usize) -> Option<usize> {
		self.nodes.get(node)?.parent
	}

	fn child(&self, node: usize, index: usize) -> Option<usize> {
		self.nodes.get(node)?.children.get(index).copied()
	}

	fn index_in_parent(&self, node: usize) -> Option<usize> {
		let parent = self.parent(node)?;
		self.nodes[parent].children.iter().position(|&c| c == node)
	}
}

impl SnapshotHost for MemoryEditor {
	type Error = EditorError;

	fn physical_root(&self) -> usize {
		Self::PHYSICAL_ROOT
	}

	fn logical_root(&self) -> usize {
		self.logical_root
	}

	fn set_logical_root(&mut self, root: usize) {
		self.record(format!("set_logical_root:{}", self.nodes[root].tag));
		self.logical_root = root;
	}

	fn is_shadow_editing(&self) -> bool {
		self.shadow_editing
	}

	fn is_dark_mode(&self) -> bool {
		self.dark_mode
	}

	fn set_dark_mode(&mut self, is_dark_mode: bool) {
		self.dark_mode = is_dark_mode;
	}

	fn capture_selection(&mut self) -> Result<Option<SelectionDescriptor>, EditorError> {
		self.record("capture_selection");
		if self.normalize_on_capture {
			let root = self.logical_root;
			self.append(root, "norm");
		}
		Ok(self.selection.clone())
	}

	fn apply_selection(
		&mut self,
		selection: Option<&SelectionDescriptor>,
	) -> Result<(), EditorError> {
		self.record("apply_selection");
		if self.fail_apply_selection {
			return Err(EditorError::Selection);
		}
		self.selection = selection.cloned();
		Ok(())
	}

	fn serialize(&self, root: usize) -> Result<String, EditorError> {
		self.record("serialize");
		if self.fail_serialize {
			return Err(EditorError::Serialize);
		}
		let children: Vec<NodeSpec> =
			self.nodes[root].children.iter().map(|&c| self.spec(c)).collect();
		serde_json::to_string(&children).map_err(|e| EditorError::Parse(e.to_string()))
	}

	fn deserialize(&mut self, root: usize, content: &str) -> Result<(), EditorError> {
		self.record("deserialize");
		let children: Vec<NodeSpec> =
			serde_json::from_str(content).map_err(|e| EditorError::Parse(e.to_string()))?;
		for old in std::mem::take(&mut self.nodes[root].children) {
			self.nodes[old].parent = None;
		}
		for child in children {
			self.build(root, child);
		}
		Ok(())
	}
}

/// Notifier that answers solicitations from a fixed list and records updates.
#[derive(Debug)]
pub struct RecordingNotifier {
	pub responses: Vec<EntityState>,
	pub solicited: Vec<usize>,
	pub updates: Vec<EntityStateUpdate>,
	pub log: CallLog,
}

impl RecordingNotifier {
	pub fn new(log: CallLog) -> Self {
		Self {
			responses: Vec::new(),
			solicited: Vec::new(),
			updates: Vec::new(),
			log,
		}
	}
}

impl EntityNotifier<usize> for RecordingNotifier {
	fn solicit_entity_states(&mut self, request: &mut EntityStateRequest<usize>) {
		self.log.borrow_mut().push("solicit".into());
		self.solicited.push(request.logical_root);
		request.entity_states.extend(self.responses.iter().cloned());
	}

	fn entity_state_changed(&mut self, update: &EntityStateUpdate) {
		self.log.borrow_mut().push(format!("entity:{}", update.entity_id));
		self.updates.push(update.clone());
	}
}

/// Editor plus notifier sharing one call log.
pub fn fixture() -> (MemoryEditor, RecordingNotifier, CallLog) {
	init_tracing();
	let log = CallLog::default();
	(MemoryEditor::new(log.clone()), RecordingNotifier::new(log.clone()), log)
}

pub fn calls(log: &CallLog) -> Vec<String> {
	log.borrow().clone()
}

pub fn clear(log: &CallLog) {
	log.borrow_mut().clear();
}
