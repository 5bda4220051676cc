use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered child indices leading from the physical root down to a sub-root.
///
/// An empty path addresses the physical root itself. Paths are stored instead
/// of node handles because the addressed node may be destroyed and rebuilt
/// between capture and restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootPath(Vec<usize>);

impl RootPath {
	/// The empty path, addressing the physical root.
	pub const fn root() -> Self {
		Self(Vec::new())
	}

	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}

	pub fn depth(&self) -> usize {
		self.0.len()
	}

	pub fn indices(&self) -> &[usize] {
		&self.0
	}
}

impl From<Vec<usize>> for RootPath {
	fn from(indices: Vec<usize>) -> Self {
		Self(indices)
	}
}

impl FromIterator<usize> for RootPath {
	fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl fmt::Display for RootPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("/")?;
		for (i, index) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str("/")?;
			}
			write!(f, "{index}")?;
		}
		Ok(())
	}
}
