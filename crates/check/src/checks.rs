//! Built-in sanity checks.

use anyhow::{Context, Result, ensure};
use planar_geometry::{Position, Rectangle, Vector, merge_horizontally, merge_vertically};
use tracing::{debug, error, info};

/// A named sanity check.
pub struct Check {
	pub name: &'static str,
	pub run: fn() -> Result<()>,
}

/// All checks, in execution order.
pub const CHECKS: &[Check] = &[
	Check {
		name: "origin",
		run: origin,
	},
	Check {
		name: "reflection",
		run: reflection,
	},
	Check {
		name: "translation",
		run: translation,
	},
	Check {
		name: "split",
		run: split,
	},
	Check {
		name: "merge",
		run: merge,
	},
];

/// Runs every check, logging each outcome. Returns the number of failures.
pub fn run_all() -> usize {
	let mut failed = 0;
	for check in CHECKS {
		debug!(check = check.name, "running");
		match (check.run)() {
			Ok(()) => info!(check = check.name, "ok"),
			Err(err) => {
				let message = format!("{err:#}");
				error!(check = check.name, error = %message, "failed");
				failed += 1;
			}
		}
	}
	failed
}

fn origin() -> Result<()> {
	let a = Position::new(0, 0);
	let b = Position::origin();
	ensure!(a == *b, "origin {b} differs from (0, 0)");
	ensure!(
		std::ptr::eq(b, Position::origin()),
		"origin is not a single instance"
	);
	Ok(())
}

fn reflection() -> Result<()> {
	let a = Position::new(0, 0);
	let c = a.reflection();
	ensure!(a.x() == c.y() && a.y() == c.x(), "position reflection");

	let p = Position::new(3, -8);
	ensure!(p.reflection().reflection() == p, "position involution");

	let v = Vector::new(-1, 6);
	ensure!(v.reflection() == Vector::new(6, -1), "vector reflection");

	let square = Rectangle::new(10, 10, Position::new(5, 5))?;
	ensure!(square.reflection() == square, "symmetric rectangle moved");
	Ok(())
}

fn translation() -> Result<()> {
	let r = Rectangle::at_origin(4, 2)?;
	let original = r;
	let moved = r + Vector::new(3, 1);
	ensure!(r == original, "translation mutated its operand");
	ensure!(moved == Vector::new(3, 1) + r, "translation is not commutative");
	ensure!(moved.pos() == Position::new(3, 1), "moved corner is {}", moved.pos());
	Ok(())
}

fn split() -> Result<()> {
	let (bottom, top) = Rectangle::at_origin(100, 200)?
		.split_horizontally(20)
		.context("splitting 100x200 at 20")?;
	ensure!(bottom == Rectangle::at_origin(100, 20)?, "bottom piece is {bottom}");
	ensure!(
		top == Rectangle::new(100, 180, Position::new(0, 20))?,
		"top piece is {top}"
	);
	ensure!(
		Rectangle::at_origin(100, 200)?.split_vertically(100).is_err(),
		"split at the far edge was accepted"
	);
	Ok(())
}

fn merge() -> Result<()> {
	let whole = Rectangle::new(30, 12, Position::new(-4, 7))?;
	let (bottom, top) = whole.split_horizontally(5)?;
	ensure!(merge_horizontally(bottom, top)? == whole, "horizontal round trip");
	let (left, right) = whole.split_vertically(11)?;
	ensure!(merge_vertically(left, right)? == whole, "vertical round trip");
	ensure!(
		merge_horizontally(top, bottom).is_err(),
		"merged rectangles in the wrong order"
	);
	Ok(())
}
