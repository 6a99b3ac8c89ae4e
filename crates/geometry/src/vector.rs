use std::fmt;

use tracing::trace;

/// A displacement in the plane.
///
/// Vectors carry no sign or magnitude constraint. There is intentionally no
/// `Default` impl: a vector always has explicit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
	dx: i32,
	dy: i32,
}

impl Vector {
	/// Creates a new vector.
	pub fn new(dx: i32, dy: i32) -> Self {
		trace!(dx, dy, "vector created");
		Self { dx, dy }
	}

	/// Returns the horizontal component.
	pub const fn x(&self) -> i32 {
		self.dx
	}

	/// Returns the vertical component.
	pub const fn y(&self) -> i32 {
		self.dy
	}

	/// Returns the vector reflected across the line x = y.
	#[must_use = "method returns the reflected value"]
	pub fn reflection(&self) -> Self {
		trace!(dx = self.dx, dy = self.dy, "vector reflection");
		Self::new(self.dy, self.dx)
	}

	/// Adds `other` to this vector in place.
	///
	/// Returns `self` so calls can be chained.
	pub fn accumulate(&mut self, other: Vector) -> &mut Self {
		self.dx += other.dx;
		self.dy += other.dy;
		self
	}
}

impl fmt::Display for Vector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.dx, self.dy)
	}
}

#[cfg(test)]
mod tests;
