//! Editor-facing undo manager.
//!
//! [`UndoManager`] owns the [`SnapshotHistory`] and runs the capture and
//! restore steps against a [`SnapshotHost`] for the usual editor commands.
//!
//! ```text
//! UndoManager                        SnapshotHost (editor implements)
//! ┌──────────────────┐   capture     ┌──────────────────────────┐
//! │ checkpoint()     │──────────────►│ capture_selection()      │
//! │ undo() / redo()  │   restore     │ serialize/deserialize()  │
//! │ jump() / reapply │──────────────►│ set_logical_root()       │
//! │                  │               └──────────────────────────┘
//! │ SnapshotHistory  │
//! └──────────────────┘
//! ```

use std::sync::Arc;

use folio_primitives::{EntityState, Snapshot};
use tracing::trace;

use crate::builder::build_snapshot;
use crate::config::HistoryConfig;
use crate::error::HistoryError;
use crate::history::SnapshotHistory;
use crate::host::{EntityNotifier, SnapshotHost};
use crate::restore::{replay_state, write_content};

/// Drives snapshot capture and history navigation for one editor.
#[derive(Debug, Default)]
pub struct UndoManager {
	history: SnapshotHistory,
}

impl UndoManager {
	pub fn new(config: &HistoryConfig) -> Self {
		Self::from_history(SnapshotHistory::with_config(config))
	}

	/// Wraps an existing history, e.g. one rebuilt from persisted state.
	pub fn from_history(history: SnapshotHistory) -> Self {
		Self { history }
	}

	pub fn history(&self) -> &SnapshotHistory {
		&self.history
	}

	pub fn into_history(self) -> SnapshotHistory {
		self.history
	}

	/// Returns `true` if [`undo`](Self::undo) would restore something,
	/// counting uncheckpointed edits as a step.
	pub fn can_undo(&self) -> bool {
		self.history.can_undo() || (self.history.has_new_content() && !self.history.is_empty())
	}

	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	/// Records that the editor changed since the last checkpoint.
	pub fn mark_new_content(&mut self) {
		self.history.mark_new_content();
	}

	/// Drops all history, as on document reload.
	pub fn reset(&mut self) {
		self.history.clear();
	}

	/// Captures the current editor state into the history.
	pub fn checkpoint<H, N>(
		&mut self,
		host: &mut H,
		notifier: &mut N,
		can_coalesce: bool,
		entity_states: Option<Vec<EntityState>>,
	) -> Result<Option<Arc<Snapshot>>, HistoryError<H::Error>>
	where
		H: SnapshotHost + ?Sized,
		N: EntityNotifier<H::Node> + ?Sized,
	{
		build_snapshot(host, notifier, &mut self.history, can_coalesce, entity_states)
	}

	/// Steps one snapshot back.
	///
	/// Uncheckpointed edits are captured first so that redo can return to
	/// them. Returns `true` if a snapshot was restored.
	pub fn undo<H, N>(
		&mut self,
		host: &mut H,
		notifier: &mut N,
	) -> Result<bool, HistoryError<H::Error>>
	where
		H: SnapshotHost + ?Sized,
		N: EntityNotifier<H::Node> + ?Sized,
	{
		if self.history.has_new_content() {
			trace!("undo: capturing pending edits");
			self.checkpoint(host, notifier, false, None)?;
		}

		if !self.history.can_undo() {
			trace!("undo: nothing to undo");
			return Ok(false);
		}
		self.step(host, notifier, -1).map(|s| s.is_some())
	}

	/// Steps one snapshot forward. Returns `true` if a snapshot was restored.
	pub fn redo<H, N>(
		&mut self,
		host: &mut H,
		notifier: &mut N,
	) -> Result<bool, HistoryError<H::Error>>
	where
		H: SnapshotHost + ?Sized,
		N: EntityNotifier<H::Node> + ?Sized,
	{
		if !self.history.can_redo() {
			trace!("redo: nothing to redo");
			return Ok(false);
		}
		self.step(host, notifier, 1).map(|s| s.is_some())
	}

	/// Moves by `steps` (clamped) and restores the snapshot landed on.
	pub fn jump<H, N>(
		&mut self,
		host: &mut H,
		notifier: &mut N,
		steps: isize,
	) -> Result<Option<Arc<Snapshot>>, HistoryError<H::Error>>
	where
		H: SnapshotHost + ?Sized,
		N: EntityNotifier<H::Node> + ?Sized,
	{
		self.step(host, notifier, steps)
	}

	/// Restores the active snapshot again without moving.
	pub fn reapply<H, N>(
		&mut self,
		host: &mut H,
		notifier: &mut N,
	) -> Result<Option<Arc<Snapshot>>, HistoryError<H::Error>>
	where
		H: SnapshotHost + ?Sized,
		N: EntityNotifier<H::Node> + ?Sized,
	{
		self.step(host, notifier, 0)
	}

	/// Navigates and restores.
	///
	/// If the content write fails the tree still shows the old entry, so the
	/// cursor is put back. A failure after the write leaves the cursor on the
	/// target, which is what the tree now holds.
	fn step<H, N>(
		&mut self,
		host: &mut H,
		notifier: &mut N,
		steps: isize,
	) -> Result<Option<Arc<Snapshot>>, HistoryError<H::Error>>
	where
		H: SnapshotHost + ?Sized,
		N: EntityNotifier<H::Node> + ?Sized,
	{
		let Some(from) = self.history.cursor() else {
			return Ok(None);
		};
		let Some(snapshot) = self.history.navigate(steps) else {
			return Ok(None);
		};

		if let Err(err) = write_content(host, &snapshot) {
			if let Some(to) = self.history.cursor().filter(|&to| to != from) {
				trace!(failed = to, cursor = from, "content write failed, cursor rolled back");
				self.history.navigate(from as isize - to as isize);
			}
			return Err(err);
		}
		if let Err(err) = replay_state(host, notifier, &snapshot) {
			trace!(cursor = ?self.history.cursor(), "restore incomplete after content write");
			return Err(err);
		}

		trace!(
			steps,
			cursor = ?self.history.cursor(),
			len = self.history.len(),
			"history step restored"
		);
		Ok(Some(snapshot))
	}
}
