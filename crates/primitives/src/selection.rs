use serde::{Deserialize, Serialize};

/// Restorable description of the editor selection at snapshot time.
///
/// Produced and consumed by the host's selection collaborator. The history
/// core stores it verbatim and never inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SelectionDescriptor {
	/// A text range. `start` and `end` are node-index paths from the physical
	/// root whose last element is the offset within the addressed node.
	#[serde(rename_all = "camelCase")]
	Range {
		start: Vec<usize>,
		end: Vec<usize>,
		is_reversed: bool,
	},
	/// A rectangular block of table cells.
	#[serde(rename_all = "camelCase")]
	Table {
		table_id: String,
		first_column: usize,
		last_column: usize,
		first_row: usize,
		last_row: usize,
	},
	/// A selected image.
	#[serde(rename_all = "camelCase")]
	Image { image_id: String },
}

impl SelectionDescriptor {
	/// Collapsed range at a single position.
	pub fn caret(position: Vec<usize>) -> Self {
		Self::Range {
			start: position.clone(),
			end: position,
			is_reversed: false,
		}
	}

	pub fn is_collapsed(&self) -> bool {
		match self {
			Self::Range { start, end, .. } => start == end,
			Self::Table { .. } | Self::Image { .. } => false,
		}
	}
}
