//! Axis-aligned rectangles.
//!
//! A [`Rectangle`] is stored as its bottom-left corner plus the diagonal vector to its
//! top-right corner. Both diagonal components are strictly positive; every constructor
//! checks this and there is no way to obtain an empty or inverted rectangle.

use std::fmt;

use tracing::{debug, trace};

use crate::direction::Axis;
use crate::error::{GeometryError, Result};
use crate::position::Position;
use crate::vector::Vector;

/// An axis-aligned rectangle with strictly positive width and height.
///
/// # Examples
///
/// ```rust
/// use planar_geometry::{Position, Rectangle, Vector};
///
/// let rect = Rectangle::new(3, 4, Position::new(1, 2))?;
/// assert_eq!(rect.area(), 12);
/// assert_eq!(rect + Vector::new(5, 6), Rectangle::new(3, 4, Position::new(6, 8))?);
/// # Ok::<(), planar_geometry::GeometryError>(())
/// ```
///
/// Splitting cuts the rectangle in two; the second piece starts where the first ends.
///
/// ```rust
/// use planar_geometry::{Position, Rectangle};
///
/// let (bottom, top) = Rectangle::at_origin(100, 200)?.split_horizontally(20)?;
/// assert_eq!(bottom, Rectangle::new(100, 20, Position::new(0, 0))?);
/// assert_eq!(top, Rectangle::new(100, 180, Position::new(0, 20))?);
/// # Ok::<(), planar_geometry::GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(try_from = "RectangleShape", into = "RectangleShape")
)]
pub struct Rectangle {
	bottom_left: Position,
	diagonal: Vector,
}

impl Rectangle {
	/// Creates a rectangle of the given size with its bottom-left corner at `pos`.
	///
	/// # Errors
	///
	/// Returns [`GeometryError::InvalidDimensions`] unless both `width` and `height`
	/// are positive, and [`GeometryError::OutOfBounds`] if the top-right corner does
	/// not fit in `i32`.
	pub fn new(width: i32, height: i32, pos: Position) -> Result<Self> {
		Self::from_diagonal(pos, Vector::new(width, height))
	}

	/// Creates a rectangle of the given size with its bottom-left corner at the origin.
	///
	/// # Errors
	///
	/// Same as [`Rectangle::new`].
	pub fn at_origin(width: i32, height: i32) -> Result<Self> {
		Self::new(width, height, *Position::origin())
	}

	/// Creates a rectangle spanning from `pos` along `diagonal`.
	///
	/// # Errors
	///
	/// Returns [`GeometryError::InvalidDimensions`] unless both diagonal components
	/// are positive, and [`GeometryError::OutOfBounds`] if the top-right corner does
	/// not fit in `i32`.
	pub fn from_diagonal(pos: Position, diagonal: Vector) -> Result<Self> {
		if diagonal.x() <= 0 || diagonal.y() <= 0 {
			return Err(GeometryError::InvalidDimensions {
				width: diagonal.x(),
				height: diagonal.y(),
			});
		}
		if pos.x().checked_add(diagonal.x()).is_none()
			|| pos.y().checked_add(diagonal.y()).is_none()
		{
			return Err(GeometryError::OutOfBounds {
				x: pos.x(),
				y: pos.y(),
				width: diagonal.x(),
				height: diagonal.y(),
			});
		}
		trace!(%pos, %diagonal, "rectangle created");
		Ok(Self {
			bottom_left: pos,
			diagonal,
		})
	}

	/// Returns the width.
	pub const fn width(&self) -> i32 {
		self.diagonal.x()
	}

	/// Returns the height.
	pub const fn height(&self) -> i32 {
		self.diagonal.y()
	}

	/// Returns a copy of the bottom-left corner.
	pub const fn pos(&self) -> Position {
		self.bottom_left
	}

	/// Returns the vector from the bottom-left to the top-right corner.
	pub const fn diagonal(&self) -> Vector {
		self.diagonal
	}

	/// Returns the top-right corner.
	pub fn top_right(&self) -> Position {
		self.bottom_left + self.diagonal
	}

	/// Returns the area. Computed in `i64` so it cannot overflow.
	pub const fn area(&self) -> i64 {
		self.width() as i64 * self.height() as i64
	}

	/// Returns the size measured across a cut line of the given orientation.
	///
	/// This is the height for [`Axis::Horizontal`] and the width for [`Axis::Vertical`].
	pub const fn extent(&self, axis: Axis) -> i32 {
		match axis {
			Axis::Horizontal => self.height(),
			Axis::Vertical => self.width(),
		}
	}

	/// Returns the rectangle reflected across the line x = y.
	///
	/// The corner and diagonal are reflected independently. If the reflected diagonal
	/// points backwards on an axis, the corner is moved by that component and the
	/// component's magnitude is used instead, so the result again spans from its
	/// bottom-left corner.
	#[must_use = "method returns the reflected value"]
	pub fn reflection(&self) -> Self {
		let mut corner = self.bottom_left.reflection();
		let diagonal = self.diagonal.reflection();

		let (dx, dy) = (diagonal.x(), diagonal.y());
		if dx < 0 {
			corner.accumulate(Vector::new(dx, 0));
		}
		if dy < 0 {
			corner.accumulate(Vector::new(0, dy));
		}

		trace!(from = %self, "rectangle reflection");
		Self {
			bottom_left: corner,
			diagonal: Vector::new(dx.abs(), dy.abs()),
		}
	}

	/// Translates this rectangle by `vec` in place. The size is unchanged.
	///
	/// The corner is clamped so that the top-right corner stays within `i32`; a
	/// translation past the edge of the coordinate space stops at the edge.
	///
	/// Returns `self` so calls can be chained.
	pub fn accumulate(&mut self, vec: Vector) -> &mut Self {
		let x = clamp_corner(self.bottom_left.x(), vec.x(), self.width());
		let y = clamp_corner(self.bottom_left.y(), vec.y(), self.height());
		self.bottom_left = Position::new(x, y);
		self
	}

	/// Cuts the rectangle with a horizontal line `place` units above its bottom edge.
	///
	/// Returns `(bottom, top)`. Both keep the original width; `top` starts at the cut.
	///
	/// A cut on the bottom or top edge (`place == 0` or `place == height`) would leave a
	/// piece of zero height, which is not a valid rectangle, so it is rejected.
	///
	/// # Errors
	///
	/// Returns [`GeometryError::SplitOutOfRange`] unless `0 < place < height`.
	pub fn split_horizontally(&self, place: i32) -> Result<(Self, Self)> {
		self.split(Axis::Horizontal, place)
	}

	/// Cuts the rectangle with a vertical line `place` units right of its left edge.
	///
	/// Returns `(left, right)`. Both keep the original height; `right` starts at the cut.
	/// As with [`split_horizontally`](Self::split_horizontally), zero-width pieces are
	/// rejected.
	///
	/// # Errors
	///
	/// Returns [`GeometryError::SplitOutOfRange`] unless `0 < place < width`.
	pub fn split_vertically(&self, place: i32) -> Result<(Self, Self)> {
		self.split(Axis::Vertical, place)
	}

	/// Cuts the rectangle along a line of the given orientation.
	///
	/// # Errors
	///
	/// Returns [`GeometryError::SplitOutOfRange`] unless `place` lies strictly
	/// inside [`extent`](Self::extent) for `axis`.
	pub fn split(&self, axis: Axis, place: i32) -> Result<(Self, Self)> {
		let extent = self.extent(axis);
		if place <= 0 || place >= extent {
			return Err(GeometryError::SplitOutOfRange {
				axis,
				place,
				extent,
			});
		}

		let (width, height) = (self.width(), self.height());
		let (first, second, shift) = match axis {
			Axis::Horizontal => (
				Vector::new(width, place),
				Vector::new(width, height - place),
				Vector::new(0, place),
			),
			Axis::Vertical => (
				Vector::new(place, height),
				Vector::new(width - place, height),
				Vector::new(place, 0),
			),
		};

		debug!(rect = %self, %axis, place, "splitting rectangle");
		Ok((
			Self {
				bottom_left: self.bottom_left,
				diagonal: first,
			},
			Self {
				bottom_left: self.bottom_left + shift,
				diagonal: second,
			},
		))
	}
}

/// Moves `start` by `delta`, keeping `start + size` within `i32`.
fn clamp_corner(start: i32, delta: i32, size: i32) -> i32 {
	let max = i64::from(i32::MAX - size);
	(i64::from(start) + i64::from(delta)).clamp(i64::from(i32::MIN), max) as i32
}

impl fmt::Display for Rectangle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}@{}", self.width(), self.height(), self.bottom_left)
	}
}

/// Unvalidated wire form of a [`Rectangle`].
#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct RectangleShape {
	bottom_left: Position,
	diagonal: Vector,
}

#[cfg(feature = "serde")]
impl TryFrom<RectangleShape> for Rectangle {
	type Error = GeometryError;

	fn try_from(shape: RectangleShape) -> Result<Self> {
		Self::from_diagonal(shape.bottom_left, shape.diagonal)
	}
}

#[cfg(feature = "serde")]
impl From<Rectangle> for RectangleShape {
	fn from(rect: Rectangle) -> Self {
		Self {
			bottom_left: rect.bottom_left,
			diagonal: rect.diagonal,
		}
	}
}
