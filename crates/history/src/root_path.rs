//! Logical root addressing.
//!
//! Snapshots record where the logical root sat below the physical root as a
//! list of child indices, and restores re-resolve that list against whatever
//! tree exists at restore time.

use folio_primitives::RootPath;
use tracing::{debug, error};

use crate::error::RootPathError;
use crate::host::NodeTree;

/// Computes the child-index path from `physical_root` down to `logical_root`.
pub fn compute_path<T>(
	tree: &T,
	physical_root: T::Node,
	logical_root: T::Node,
) -> Result<RootPath, RootPathError>
where
	T: NodeTree + ?Sized,
{
	let mut indices = Vec::new();
	let mut node = logical_root;

	while node != physical_root {
		let (Some(parent), Some(index)) = (tree.parent(node), tree.index_in_parent(node)) else {
			error!(
				?physical_root,
				?logical_root,
				depth = indices.len(),
				"logical root is outside the physical root"
			);
			return Err(RootPathError::NotDescendant {
				depth: indices.len(),
			});
		};
		indices.push(index);
		node = parent;
	}

	indices.reverse();
	Ok(RootPath::from(indices))
}

/// Follows `path` down from `physical_root`.
///
/// A path that no longer fits the tree resolves to `physical_root`.
pub fn resolve_path<T>(tree: &T, physical_root: T::Node, path: &RootPath) -> T::Node
where
	T: NodeTree + ?Sized,
{
	let mut node = physical_root;
	for (depth, &index) in path.indices().iter().enumerate() {
		match tree.child(node, index) {
			Some(child) => node = child,
			None => {
				debug!(%path, depth, index, "stale logical root path, using physical root");
				return physical_root;
			}
		}
	}
	node
}
