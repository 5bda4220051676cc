//! Undo/redo snapshot history for a structured-document editor whose active
//! editing root may be a sub-tree of the outer container.
//!
//! # Layers
//!
//! * [`SnapshotHistory`]: bounded cursor-based stack with coalescing.
//! * [`build_snapshot`] / [`restore`]: capture and replay against a
//!   [`SnapshotHost`].
//! * [`compute_path`] / [`resolve_path`]: logical root addressing by child
//!   index paths.
//! * [`UndoManager`]: the editor-facing combination of the above.

pub mod builder;
pub mod config;
pub mod error;
pub mod history;
pub mod host;
pub mod manager;
pub mod restore;
pub mod root_path;

pub use builder::build_snapshot;
pub use config::{DEFAULT_MAX_ENTRIES, HistoryConfig};
pub use error::{ConfigError, HistoryError, PersistError, RootPathError};
pub use history::{PersistedEntry, PersistedHistory, PushOutcome, SnapshotHistory};
pub use host::{EntityNotifier, NodeTree, SnapshotHost};
pub use manager::UndoManager;
pub use restore::restore;
pub use root_path::{compute_path, resolve_path};
