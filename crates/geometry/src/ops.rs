//! Translation operators.
//!
//! Every `+` takes its operands by value and builds a new result, so neither operand
//! is ever modified. `+=` is the in-place form and forwards to `accumulate`.

use std::ops::{Add, AddAssign};

use crate::position::Position;
use crate::rectangle::Rectangle;
use crate::rectangles::Rectangles;
use crate::vector::Vector;

impl Add for Vector {
	type Output = Vector;

	fn add(mut self, rhs: Vector) -> Vector {
		self.accumulate(rhs);
		self
	}
}

impl AddAssign for Vector {
	fn add_assign(&mut self, rhs: Vector) {
		self.accumulate(rhs);
	}
}

impl Add<Vector> for Position {
	type Output = Position;

	fn add(mut self, rhs: Vector) -> Position {
		self.accumulate(rhs);
		self
	}
}

impl Add<Position> for Vector {
	type Output = Position;

	fn add(self, rhs: Position) -> Position {
		rhs + self
	}
}

impl AddAssign<Vector> for Position {
	fn add_assign(&mut self, rhs: Vector) {
		self.accumulate(rhs);
	}
}

impl Add<Vector> for Rectangle {
	type Output = Rectangle;

	fn add(mut self, rhs: Vector) -> Rectangle {
		self.accumulate(rhs);
		self
	}
}

impl Add<Rectangle> for Vector {
	type Output = Rectangle;

	fn add(self, rhs: Rectangle) -> Rectangle {
		rhs + self
	}
}

impl AddAssign<Vector> for Rectangle {
	fn add_assign(&mut self, rhs: Vector) {
		self.accumulate(rhs);
	}
}

impl Add<Vector> for Rectangles {
	type Output = Rectangles;

	fn add(mut self, rhs: Vector) -> Rectangles {
		self.accumulate(rhs);
		self
	}
}

impl Add<Vector> for &Rectangles {
	type Output = Rectangles;

	fn add(self, rhs: Vector) -> Rectangles {
		self.clone() + rhs
	}
}

impl Add<Rectangles> for Vector {
	type Output = Rectangles;

	fn add(self, rhs: Rectangles) -> Rectangles {
		rhs + self
	}
}

impl Add<&Rectangles> for Vector {
	type Output = Rectangles;

	fn add(self, rhs: &Rectangles) -> Rectangles {
		rhs + self
	}
}

impl AddAssign<Vector> for Rectangles {
	fn add_assign(&mut self, rhs: Vector) {
		self.accumulate(rhs);
	}
}
