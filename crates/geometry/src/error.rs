//! Error types for geometric operations.

use thiserror::Error;

use crate::direction::Axis;

/// Errors that can occur when constructing, splitting or merging rectangles.
///
/// Every variant describes a caller contract violation. Operations that fail leave
/// their inputs untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
	/// A rectangle was requested with a non-positive width or height.
	#[error("invalid rectangle dimensions {width}x{height} (both must be positive)")]
	InvalidDimensions {
		/// The requested width.
		width: i32,
		/// The requested height.
		height: i32,
	},

	/// The rectangle's top-right corner would lie outside the `i32` coordinate space.
	#[error("rectangle {width}x{height} at ({x}, {y}) extends past the coordinate range")]
	OutOfBounds {
		/// Corner x coordinate.
		x: i32,
		/// Corner y coordinate.
		y: i32,
		/// The requested width.
		width: i32,
		/// The requested height.
		height: i32,
	},

	/// A split position does not fall strictly inside the rectangle.
	#[error("{axis} split at {place} is outside (0, {extent})")]
	SplitOutOfRange {
		/// The cut line orientation.
		axis: Axis,
		/// The requested cut offset.
		place: i32,
		/// The extent being cut (height for horizontal, width for vertical).
		extent: i32,
	},

	/// The rectangles' edges along the cut line differ in length.
	#[error("{axis} merge of rectangles with different extents ({first} vs {second})")]
	ExtentMismatch {
		/// The cut line orientation.
		axis: Axis,
		/// Edge length of the first rectangle.
		first: i32,
		/// Edge length of the second rectangle.
		second: i32,
	},

	/// The rectangles are not aligned along the cut line.
	#[error("{axis} merge of misaligned rectangles (offset {first} vs {second})")]
	OffsetMismatch {
		/// The cut line orientation.
		axis: Axis,
		/// Corner coordinate of the first rectangle along the cut line.
		first: i32,
		/// Corner coordinate of the second rectangle along the cut line.
		second: i32,
	},

	/// The second rectangle does not start where the first one ends.
	#[error("{axis} merge of non-adjacent rectangles (expected edge at {expected}, found {found})")]
	NotAdjacent {
		/// The cut line orientation.
		axis: Axis,
		/// Far edge of the first rectangle.
		expected: i64,
		/// Near edge of the second rectangle.
		found: i32,
	},

	/// The merged rectangle would be too large to represent.
	#[error("{axis} merge overflows ({first} + {second} exceeds i32)")]
	ExtentOverflow {
		/// The cut line orientation.
		axis: Axis,
		/// Extent of the first rectangle across the cut line.
		first: i32,
		/// Extent of the second rectangle across the cut line.
		second: i32,
	},
}

/// Result type for geometric operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
