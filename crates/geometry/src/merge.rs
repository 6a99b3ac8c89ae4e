//! Merging edge-adjacent rectangles.
//!
//! A merge is the inverse of a split: when `merge(axis, a, b)` succeeds,
//! `split(axis, a.extent(axis))` on the result gives back `(a, b)`.

use tracing::debug;

use crate::direction::Axis;
use crate::error::{GeometryError, Result};
use crate::rectangle::Rectangle;
use crate::vector::Vector;

/// Joins `bottom` with `top`, which must sit directly on top of it.
///
/// # Errors
///
/// See [`merge`].
pub fn merge_horizontally(bottom: Rectangle, top: Rectangle) -> Result<Rectangle> {
	merge(Axis::Horizontal, bottom, top)
}

/// Joins `left` with `right`, which must sit directly to the right of it.
///
/// # Errors
///
/// See [`merge`].
pub fn merge_vertically(left: Rectangle, right: Rectangle) -> Result<Rectangle> {
	merge(Axis::Vertical, left, right)
}

/// Joins two rectangles that share a full edge along a cut line of the given orientation.
///
/// `second` must start exactly where `first` ends across the cut line, and both must
/// cover the same stretch along it.
///
/// # Errors
///
/// - [`GeometryError::ExtentMismatch`] if the shared edges differ in length.
/// - [`GeometryError::OffsetMismatch`] if the shared edges are shifted against each other.
/// - [`GeometryError::NotAdjacent`] if there is a gap or overlap between the rectangles.
/// - [`GeometryError::ExtentOverflow`] if the merged size does not fit in `i32`.
pub fn merge(axis: Axis, first: Rectangle, second: Rectangle) -> Result<Rectangle> {
	let result = try_merge(axis, first, second);
	match &result {
		Ok(merged) => debug!(%axis, %first, %second, %merged, "merged rectangles"),
		Err(error) => debug!(%axis, %first, %second, %error, "merge rejected"),
	}
	result
}

fn try_merge(axis: Axis, first: Rectangle, second: Rectangle) -> Result<Rectangle> {
	// Edge length and offset run along the cut line, start runs across it.
	let (a, b) = (first.pos(), second.pos());
	let (first_edge, second_edge, first_offset, second_offset, first_start, second_start) =
		match axis {
			Axis::Horizontal => (first.width(), second.width(), a.x(), b.x(), a.y(), b.y()),
			Axis::Vertical => (first.height(), second.height(), a.y(), b.y(), a.x(), b.x()),
		};

	if first_edge != second_edge {
		return Err(GeometryError::ExtentMismatch {
			axis,
			first: first_edge,
			second: second_edge,
		});
	}
	if first_offset != second_offset {
		return Err(GeometryError::OffsetMismatch {
			axis,
			first: first_offset,
			second: second_offset,
		});
	}

	let expected = i64::from(first_start) + i64::from(first.extent(axis));
	if expected != i64::from(second_start) {
		return Err(GeometryError::NotAdjacent {
			axis,
			expected,
			found: second_start,
		});
	}

	let extent = first
		.extent(axis)
		.checked_add(second.extent(axis))
		.ok_or(GeometryError::ExtentOverflow {
			axis,
			first: first.extent(axis),
			second: second.extent(axis),
		})?;
	let diagonal = match axis {
		Axis::Horizontal => Vector::new(first_edge, extent),
		Axis::Vertical => Vector::new(extent, first_edge),
	};
	Rectangle::from_diagonal(first.pos(), diagonal)
}
