//! Snapshot replay.

use folio_primitives::{EntityStateUpdate, Snapshot};
use tracing::trace;

use crate::error::HistoryError;
use crate::host::{EntityNotifier, SnapshotHost};
use crate::root_path::resolve_path;

/// Writes `snapshot` back into the host.
///
/// Content is written into the physical root before the logical root is
/// resolved, not after. Snapshot content is always serialized from the
/// physical root, and writing it replaces the nodes the stored path
/// addresses, so only a path resolved against the rebuilt tree yields a live
/// node. A stale path lands on the physical root. Selection is applied after
/// the logical root is set, and entity states are replayed last, one
/// notification per entity.
///
/// The history is not touched: navigating and restoring are separate steps.
pub fn restore<H, N>(
	host: &mut H,
	notifier: &mut N,
	snapshot: &Snapshot,
) -> Result<(), HistoryError<H::Error>>
where
	H: SnapshotHost + ?Sized,
	N: EntityNotifier<H::Node> + ?Sized,
{
	write_content(host, snapshot)?;
	replay_state(host, notifier, snapshot)
}

/// Replaces the physical root's content with the snapshot's.
pub(crate) fn write_content<H>(
	host: &mut H,
	snapshot: &Snapshot,
) -> Result<(), HistoryError<H::Error>>
where
	H: SnapshotHost + ?Sized,
{
	let physical_root = host.physical_root();
	host.deserialize(physical_root, &snapshot.content).map_err(HistoryError::Host)
}

/// Everything after the content write: logical root, mode, selection, entities.
pub(crate) fn replay_state<H, N>(
	host: &mut H,
	notifier: &mut N,
	snapshot: &Snapshot,
) -> Result<(), HistoryError<H::Error>>
where
	H: SnapshotHost + ?Sized,
	N: EntityNotifier<H::Node> + ?Sized,
{
	let physical_root = host.physical_root();
	let logical_root = resolve_path(&*host, physical_root, &snapshot.logical_root_path);
	host.set_logical_root(logical_root);
	host.set_dark_mode(snapshot.is_dark_mode);
	host.apply_selection(snapshot.selection.as_ref()).map_err(HistoryError::Host)?;

	let entity_states = snapshot.entity_states();
	for state in entity_states {
		notifier.entity_state_changed(&EntityStateUpdate::from(state));
	}

	trace!(
		path = %snapshot.logical_root_path,
		?logical_root,
		entities = entity_states.len(),
		"snapshot restored"
	);
	Ok(())
}
