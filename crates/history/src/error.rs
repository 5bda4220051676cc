//! Error types for snapshot capture, restore, configuration, and persistence.

use thiserror::Error;

/// Logical root addressing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootPathError {
	/// The upward walk from the logical root ran out of parents before
	/// reaching the physical root. Indicates a caller bug.
	#[error("logical root is not a descendant of the physical root (walked {depth} levels)")]
	NotDescendant {
		/// Number of levels walked before the walk ended.
		depth: usize,
	},
}

/// Errors raised while capturing or restoring a snapshot.
///
/// Host collaborator errors are carried through untouched in [`HistoryError::Host`].
#[derive(Debug, Error)]
pub enum HistoryError<E> {
	/// A host collaborator (serialization, selection) failed.
	#[error(transparent)]
	Host(E),

	/// The logical root could not be addressed from the physical root.
	#[error(transparent)]
	RootPath(#[from] RootPathError),
}

impl<E> HistoryError<E> {
	/// Returns the host error, if that is what this is.
	pub fn into_host(self) -> Option<E> {
		match self {
			Self::Host(err) => Some(err),
			Self::RootPath(_) => None,
		}
	}
}

/// Errors loading a [`HistoryConfig`](crate::HistoryConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The TOML document could not be parsed into a config.
	#[error("history config parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A field holds a value the history cannot work with.
	#[error("invalid history config: {0}")]
	Invalid(String),
}

/// Errors rebuilding a history from its persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
	/// The stored cursor does not point into the stored entries.
	#[error("persisted cursor {cursor:?} is out of range for {len} entries")]
	CursorOutOfRange { cursor: Option<usize>, len: usize },
}
