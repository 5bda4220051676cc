use serde::{Deserialize, Serialize};

use crate::{EntityState, RootPath, SelectionDescriptor};

/// Restorable capture of editable state at one point in history.
///
/// Snapshots are shared as `Arc<Snapshot>` once they enter a history and are
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
	/// Serialized content of the physical root, read after selection capture.
	#[serde(rename = "html")]
	pub content: String,
	/// Selection at capture time, if the editor had one.
	pub selection: Option<SelectionDescriptor>,
	/// Whether the editor was in dark mode.
	pub is_dark_mode: bool,
	/// Entity states replayed when navigating to this snapshot.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub entity_states: Option<Vec<EntityState>>,
	/// Path from the physical root to the logical root at capture time.
	#[serde(default)]
	pub logical_root_path: RootPath,
}

impl Snapshot {
	/// Snapshot of `content` at the physical root with no selection.
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
			selection: None,
			is_dark_mode: false,
			entity_states: None,
			logical_root_path: RootPath::root(),
		}
	}

	pub fn with_selection(mut self, selection: SelectionDescriptor) -> Self {
		self.selection = Some(selection);
		self
	}

	pub fn with_dark_mode(mut self, is_dark_mode: bool) -> Self {
		self.is_dark_mode = is_dark_mode;
		self
	}

	pub fn with_entity_states(mut self, entity_states: Vec<EntityState>) -> Self {
		self.entity_states = Some(entity_states);
		self
	}

	pub fn with_logical_root_path(mut self, path: RootPath) -> Self {
		self.logical_root_path = path;
		self
	}

	/// Size charged against a history byte budget.
	pub fn content_len(&self) -> usize {
		self.content.len()
	}

	/// Entity states to replay, empty when none were recorded.
	pub fn entity_states(&self) -> &[EntityState] {
		self.entity_states.as_deref().unwrap_or_default()
	}
}
