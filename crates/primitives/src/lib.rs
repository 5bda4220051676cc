//! Core data types for undo snapshots: content, selection, entity state, and root paths.

/// Embedded entity state carried alongside a snapshot.
pub mod entity;
/// Child-index paths addressing a sub-root below the physical root.
pub mod path;
/// Serializable selection descriptors.
pub mod selection;
/// The immutable snapshot record.
pub mod snapshot;

pub use entity::{EntityState, EntityStateRequest, EntityStateUpdate};
pub use path::RootPath;
pub use selection::SelectionDescriptor;
pub use snapshot::Snapshot;
