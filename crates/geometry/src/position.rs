use std::fmt;

use tracing::trace;

use crate::vector::Vector;

/// An absolute point in the plane.
///
/// There is intentionally no `Default` impl. Use [`Position::origin`] for `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
	x: i32,
	y: i32,
}

/// The shared `(0, 0)` instance handed out by [`Position::origin`].
static ORIGIN: Position = Position { x: 0, y: 0 };

impl Position {
	/// Creates a new position.
	pub fn new(x: i32, y: i32) -> Self {
		trace!(x, y, "position created");
		Self { x, y }
	}

	/// Returns the shared, read-only origin `(0, 0)`.
	///
	/// Every call returns a reference to the same instance.
	pub fn origin() -> &'static Position {
		&ORIGIN
	}

	/// Returns the x coordinate.
	pub const fn x(&self) -> i32 {
		self.x
	}

	/// Returns the y coordinate.
	pub const fn y(&self) -> i32 {
		self.y
	}

	/// Returns the position reflected across the line x = y.
	#[must_use = "method returns the reflected value"]
	pub fn reflection(&self) -> Self {
		trace!(x = self.x, y = self.y, "position reflection");
		Self::new(self.y, self.x)
	}

	/// Translates this position by `vec` in place.
	///
	/// Returns `self` so calls can be chained.
	pub fn accumulate(&mut self, vec: Vector) -> &mut Self {
		self.x += vec.x();
		self.y += vec.y();
		self
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

#[cfg(test)]
mod tests;
