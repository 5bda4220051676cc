//! Snapshot capture.

use std::sync::Arc;

use folio_primitives::{EntityState, EntityStateRequest, Snapshot};
use tracing::{debug, trace};

use crate::error::HistoryError;
use crate::history::SnapshotHistory;
use crate::host::{EntityNotifier, SnapshotHost};
use crate::root_path::compute_path;

/// Captures the host's editable state and stores it in `history`.
///
/// Returns `Ok(None)` without touching the host or the history while a shadow
/// edit is active. Selection is captured before content is serialized, since
/// capturing it may normalize the tree.
///
/// When `entity_states` is `None` and the logical root is below the physical
/// root, `notifier` is asked to fill an [`EntityStateRequest`] for it. Snapshots
/// at the physical root keep whatever the caller passed.
///
/// Host errors propagate unchanged and leave the history untouched.
pub fn build_snapshot<H, N>(
	host: &mut H,
	notifier: &mut N,
	history: &mut SnapshotHistory,
	can_coalesce: bool,
	entity_states: Option<Vec<EntityState>>,
) -> Result<Option<Arc<Snapshot>>, HistoryError<H::Error>>
where
	H: SnapshotHost + ?Sized,
	N: EntityNotifier<H::Node> + ?Sized,
{
	if host.is_shadow_editing() {
		debug!("shadow edit active, snapshot skipped");
		return Ok(None);
	}

	let selection = host.capture_selection().map_err(HistoryError::Host)?;
	let physical_root = host.physical_root();
	let logical_root = host.logical_root();
	let content = host.serialize(physical_root).map_err(HistoryError::Host)?;
	let logical_root_path = compute_path(&*host, physical_root, logical_root)?;

	let entity_states = match entity_states {
		None if logical_root != physical_root => {
			let mut request = EntityStateRequest::new(logical_root);
			notifier.solicit_entity_states(&mut request);
			trace!(
				path = %logical_root_path,
				entities = request.entity_states.len(),
				"entity states solicited for sub-root snapshot"
			);
			Some(request.entity_states)
		}
		other => other,
	};

	let snapshot = Arc::new(Snapshot {
		content,
		selection,
		is_dark_mode: host.is_dark_mode(),
		entity_states,
		logical_root_path,
	});
	history.push(Arc::clone(&snapshot), can_coalesce);
	Ok(Some(snapshot))
}
