//! Cursor-based snapshot history.
//!
//! Entries before the cursor are undo steps and entries after it are redo
//! steps. A push that is not coalesced drops the redo steps, appends, and
//! moves the cursor to the new head. Coalescing replaces the head in place
//! when both the caller and the head entry allow it and the cursor has not
//! moved since the head was stored.

use std::collections::VecDeque;
use std::sync::Arc;

use folio_primitives::Snapshot;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::HistoryConfig;
use crate::error::PersistError;


#[derive(Debug, Clone)]
struct HistoryEntry {
	snapshot: Arc<Snapshot>,
	/// Whether a following coalescing push may replace this entry.
	coalescible: bool,
}

/// What [`SnapshotHistory::push`] did with a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
	/// Stored as a new entry at the head.
	Appended { evicted: usize },
	/// Replaced the entry under the cursor.
	Coalesced { evicted: usize },
}

impl PushOutcome {
	pub fn evicted(self) -> usize {
		match self {
			Self::Appended { evicted } | Self::Coalesced { evicted } => evicted,
		}
	}
}

/// Bounded, navigable sequence of snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
	entries: VecDeque<HistoryEntry>,
	/// Index of the active entry; `None` only while empty.
	cursor: Option<usize>,
	/// Live editor diverged from the active entry since the last push.
	has_new_content: bool,
	/// Set by navigation; blocks coalescing into the entry under the cursor.
	navigated: bool,
	total_content_bytes: usize,
	max_entries: usize,
	max_content_bytes: Option<usize>,
}

impl Default for SnapshotHistory {
	fn default() -> Self {
		Self::with_config(&HistoryConfig::default())
	}
}

impl SnapshotHistory {
	/// Creates an empty history holding at most `max_entries` snapshots.
	pub fn new(max_entries: usize) -> Self {
		Self::with_config(&HistoryConfig::with_max_entries(max_entries))
	}

	pub fn with_config(config: &HistoryConfig) -> Self {
		Self {
			entries: VecDeque::new(),
			cursor: None,
			has_new_content: false,
			navigated: false,
			total_content_bytes: 0,
			max_entries: config.max_entries.max(1),
			max_content_bytes: config.max_content_bytes,
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	pub fn max_entries(&self) -> usize {
		self.max_entries
	}

	/// Summed content length of all stored snapshots.
	pub fn total_content_bytes(&self) -> usize {
		self.total_content_bytes
	}

	pub fn has_new_content(&self) -> bool {
		self.has_new_content
	}

	/// Records that the editor changed without a checkpoint.
	pub fn mark_new_content(&mut self) {
		self.has_new_content = true;
	}

	/// The snapshot under the cursor.
	pub fn current(&self) -> Option<Arc<Snapshot>> {
		self.get(self.cursor?)
	}

	pub fn get(&self, index: usize) -> Option<Arc<Snapshot>> {
		self.entries.get(index).map(|e| Arc::clone(&e.snapshot))
	}

	/// Iterates stored snapshots from oldest to newest.
	pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> + '_ {
		self.entries.iter().map(|e| e.snapshot.as_ref())
	}

	/// Returns `true` if a push with `can_coalesce` would replace the entry
	/// under the cursor instead of appending.
	pub fn is_coalescible_head(&self) -> bool {
		!self.navigated
			&& self
				.cursor
				.and_then(|c| self.entries.get(c))
				.is_some_and(|e| e.coalescible)
	}

	/// Stores `snapshot`, coalescing into the active entry when allowed.
	pub fn push(&mut self, snapshot: Arc<Snapshot>, can_coalesce: bool) -> PushOutcome {
		self.has_new_content = false;

		if can_coalesce && self.is_coalescible_head() {
			if let Some(entry) = self.cursor.and_then(|c| self.entries.get_mut(c)) {
				self.total_content_bytes = self.total_content_bytes
					- entry.snapshot.content_len()
					+ snapshot.content_len();
				entry.snapshot = snapshot;
				entry.coalescible = true;

				let evicted = self.enforce_bounds();
				trace!(
					cursor = ?self.cursor,
					len = self.entries.len(),
					evicted,
					"snapshot coalesced"
				);
				return PushOutcome::Coalesced { evicted };
			}
		}

		let cleared = self.clear_redo();
		self.total_content_bytes += snapshot.content_len();
		self.entries.push_back(HistoryEntry {
			snapshot,
			coalescible: can_coalesce,
		});
		self.cursor = Some(self.entries.len() - 1);
		self.navigated = false;

		let evicted = self.enforce_bounds();
		trace!(
			cursor = ?self.cursor,
			len = self.entries.len(),
			redo_cleared = cleared,
			evicted,
			coalescible = can_coalesce,
			"snapshot pushed"
		);
		PushOutcome::Appended { evicted }
	}

	/// Moves the cursor by `steps` (negative undoes, positive redoes), clamped
	/// to the stored range, and returns the snapshot it lands on.
	///
	/// `steps == 0` returns the active snapshot without touching any state.
	pub fn navigate(&mut self, steps: isize) -> Option<Arc<Snapshot>> {
		let cursor = self.cursor?;
		if steps != 0 {
			let last = self.entries.len() - 1;
			let target = cursor.saturating_add_signed(steps).min(last);
			self.cursor = Some(target);
			self.navigated = true;
			trace!(from = cursor, to = target, steps, "history navigated");
		}
		self.current()
	}

	/// Returns `true` if moving by `steps` stays inside the stored range.
	pub fn can_move(&self, steps: isize) -> bool {
		self.cursor
			.and_then(|c| c.checked_add_signed(steps))
			.is_some_and(|target| target < self.entries.len())
	}

	pub fn can_undo(&self) -> bool {
		self.can_move(-1)
	}

	pub fn can_redo(&self) -> bool {
		self.can_move(1)
	}

	/// Drops every entry after the cursor. Returns how many were dropped.
	pub fn clear_redo(&mut self) -> usize {
		let Some(cursor) = self.cursor else {
			return 0;
		};
		let dropped: Vec<_> = self.entries.drain(cursor + 1..).collect();
		for entry in &dropped {
			self.total_content_bytes -= entry.snapshot.content_len();
		}
		if !dropped.is_empty() {
			trace!(cleared = dropped.len(), "redo entries cleared");
		}
		dropped.len()
	}

	/// Forgets every snapshot, as on document reload.
	pub fn clear(&mut self) {
		trace!(len = self.entries.len(), "history cleared");
		self.entries.clear();
		self.cursor = None;
		self.has_new_content = false;
		self.navigated = false;
		self.total_content_bytes = 0;
	}

	/// Copies the history into its serializable form.
	pub fn to_persisted(&self) -> PersistedHistory {
		PersistedHistory {
			entries: self
				.entries
				.iter()
				.map(|e| PersistedEntry {
					snapshot: Snapshot::clone(&e.snapshot),
					coalescible: e.coalescible,
				})
				.collect(),
			cursor: self.cursor,
		}
	}

	/// Rebuilds a history from its persisted form, applying `config` bounds.
	///
	/// Coalescing into a restored head is never allowed.
	pub fn from_persisted(
		persisted: PersistedHistory,
		config: &HistoryConfig,
	) -> Result<Self, PersistError> {
		let len = persisted.entries.len();
		let cursor_ok = match persisted.cursor {
			None => len == 0,
			Some(c) => c < len,
		};
		if !cursor_ok {
			return Err(PersistError::CursorOutOfRange {
				cursor: persisted.cursor,
				len,
			});
		}

		let mut history = Self::with_config(config);
		for entry in persisted.entries {
			history.total_content_bytes += entry.snapshot.content_len();
			history.entries.push_back(HistoryEntry {
				snapshot: Arc::new(entry.snapshot),
				coalescible: entry.coalescible,
			});
		}
		history.cursor = persisted.cursor;
		history.navigated = true;
		history.enforce_bounds();
		Ok(history)
	}

	fn over_budget(&self) -> bool {
		self.entries.len() > self.max_entries
			|| self
				.max_content_bytes
				.is_some_and(|max| self.total_content_bytes > max)
	}

	/// Evicts oldest entries while over budget, never the one under the
	/// cursor, then trims redo entries if the count is still too high.
	fn enforce_bounds(&mut self) -> usize {
		let mut evicted = 0;
		while self.over_budget() {
			let Some(cursor) = self.cursor.filter(|&c| c > 0) else {
				break;
			};
			let Some(entry) = self.entries.pop_front() else {
				break;
			};
			self.total_content_bytes -= entry.snapshot.content_len();
			self.cursor = Some(cursor - 1);
			evicted += 1;
		}

		if let Some(cursor) = self.cursor {
			while self.entries.len() > self.max_entries && self.entries.len() > cursor + 1 {
				if let Some(entry) = self.entries.pop_back() {
					self.total_content_bytes -= entry.snapshot.content_len();
					evicted += 1;
				}
			}
		}

		if evicted > 0 {
			trace!(evicted, cursor = ?self.cursor, len = self.entries.len(), "history evicted");
		}
		evicted
	}
}

/// Serializable form of a [`SnapshotHistory`], for hosts that keep undo
/// across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedHistory {
	pub entries: Vec<PersistedEntry>,
	pub cursor: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedEntry {
	pub snapshot: Snapshot,
	#[serde(default)]
	pub coalescible: bool,
}
