//! Traits the editor implements so the history core can capture and restore
//! snapshots without owning the live tree.
//!
//! ```text
//! build_snapshot / restore            SnapshotHost (editor implements)
//! ┌─────────────────────┐             ┌──────────────────────────────┐
//! │ capture selection   │────────────►│ capture_selection()          │
//! │ serialize content   │────────────►│ serialize() / deserialize()  │
//! │ compute root path   │────────────►│ NodeTree: parent/child/index │
//! │ replay entities     │──┐          │ set_logical_root()           │
//! └─────────────────────┘  │          └──────────────────────────────┘
//!                          │          EntityNotifier (plugins implement)
//!                          └─────────►│ solicit_entity_states()      │
//!                                     │ entity_state_changed()       │
//! ```

use std::fmt;

use folio_primitives::{EntityStateRequest, EntityStateUpdate, SelectionDescriptor};

/// Read-only navigation over the live tree.
pub trait NodeTree {
	/// Node handle. Handles only need to stay valid for the duration of a
	/// single capture or restore.
	type Node: Copy + Eq + fmt::Debug;

	/// Returns the parent of `node`, or `None` for a detached or top node.
	fn parent(&self, node: Self::Node) -> Option<Self::Node>;

	/// Returns the child of `node` at `index`, if it exists.
	fn child(&self, node: Self::Node, index: usize) -> Option<Self::Node>;

	/// Returns the position of `node` among its parent's children.
	fn index_in_parent(&self, node: Self::Node) -> Option<usize>;
}

/// Editor operations needed to capture and restore snapshots.
pub trait SnapshotHost: NodeTree {
	/// Collaborator failure type, propagated to callers unchanged.
	type Error;

	/// The outer container the editor owns for its whole lifetime.
	fn physical_root(&self) -> Self::Node;

	/// The currently active editing sub-root.
	fn logical_root(&self) -> Self::Node;

	/// Makes `root` the active editing sub-root.
	fn set_logical_root(&mut self, root: Self::Node);

	/// Returns `true` while a preview/shadow edit is in progress.
	fn is_shadow_editing(&self) -> bool;

	fn is_dark_mode(&self) -> bool;

	fn set_dark_mode(&mut self, is_dark_mode: bool);

	/// Captures the current selection.
	///
	/// May normalize the tree as a side effect, so content is read after it.
	fn capture_selection(&mut self) -> Result<Option<SelectionDescriptor>, Self::Error>;

	/// Applies a previously captured selection; `None` clears it.
	fn apply_selection(
		&mut self,
		selection: Option<&SelectionDescriptor>,
	) -> Result<(), Self::Error>;

	/// Serializes the subtree under `root`.
	fn serialize(&self, root: Self::Node) -> Result<String, Self::Error>;

	/// Replaces the subtree under `root` with parsed `content`.
	fn deserialize(&mut self, root: Self::Node, content: &str) -> Result<(), Self::Error>;
}

/// Notification port between the history core and entity owners.
///
/// Both methods default to no-ops, so `()` serves hosts without entities.
pub trait EntityNotifier<N> {
	/// Asks entity owners which states belong to a sub-root snapshot.
	fn solicit_entity_states(&mut self, request: &mut EntityStateRequest<N>) {
		let _ = request;
	}

	/// Tells the owner of one entity to re-apply its state.
	fn entity_state_changed(&mut self, update: &EntityStateUpdate) {
		let _ = update;
	}
}

impl<N> EntityNotifier<N> for () {}
