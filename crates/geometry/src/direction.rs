//! Directional types for split and merge operations.

use std::fmt;

/// Axis for split and merge operations.
///
/// Names refer to the **cut line orientation**:
/// - `Horizontal` = horizontal cut line, pieces stacked bottom/top along the height
/// - `Vertical` = vertical cut line, pieces side by side left/right along the width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
	Horizontal,
	Vertical,
}

impl Axis {
	/// Returns the other axis.
	pub const fn flip(self) -> Self {
		match self {
			Self::Horizontal => Self::Vertical,
			Self::Vertical => Self::Horizontal,
		}
	}
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Horizontal => "horizontal",
			Self::Vertical => "vertical",
		})
	}
}
