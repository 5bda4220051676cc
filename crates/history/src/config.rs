use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of snapshots kept before the oldest are evicted.
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Bounds applied to a [`SnapshotHistory`](crate::SnapshotHistory).
///
/// ```toml
/// max_entries = 50
/// max_content_bytes = 10_000_000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
	/// Maximum number of stored snapshots.
	pub max_entries: usize,
	/// Optional budget for the summed length of all stored snapshot contents.
	pub max_content_bytes: Option<usize>,
}

impl Default for HistoryConfig {
	fn default() -> Self {
		Self {
			max_entries: DEFAULT_MAX_ENTRIES,
			max_content_bytes: None,
		}
	}
}

impl HistoryConfig {
	pub fn with_max_entries(max_entries: usize) -> Self {
		Self {
			max_entries,
			..Self::default()
		}
	}

	/// Parses and validates a config from TOML source.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_entries == 0 {
			return Err(ConfigError::Invalid("max_entries must be at least 1".into()));
		}
		if self.max_content_bytes == Some(0) {
			return Err(ConfigError::Invalid(
				"max_content_bytes must be positive when set".into(),
			));
		}
		Ok(())
	}
}
