//! Behaviour of the public API as seen from a downstream crate.

use planar_geometry::prelude::*;

#[test]
fn origin_equals_zero_and_is_stable() {
	let a = Position::new(0, 0);
	let b = Position::origin();
	assert_eq!(a, *b);
	assert!(std::ptr::eq(b, Position::origin()));

	let c = a.reflection();
	assert_eq!(a.x(), c.y());
	assert_eq!(a.y(), c.x());
}

#[test]
fn split_example_from_the_docs() -> Result<()> {
	let (bottom, top) = Rectangle::at_origin(100, 200)?.split_horizontally(20)?;
	assert_eq!(bottom, Rectangle::new(100, 20, Position::new(0, 0))?);
	assert_eq!(top, Rectangle::new(100, 180, Position::new(0, 20))?);
	Ok(())
}

#[test]
fn errors_render_readable_messages() {
	let err = Rectangle::at_origin(0, 4).unwrap_err();
	assert_eq!(
		err.to_string(),
		"invalid rectangle dimensions 0x4 (both must be positive)"
	);

	let err = Rectangle::at_origin(4, 4)
		.unwrap()
		.split_vertically(4)
		.unwrap_err();
	assert_eq!(err.to_string(), "vertical split at 4 is outside (0, 4)");
}

#[test]
fn collection_translation_round_trips() -> Result<()> {
	let rects: Rectangles = vec![
		Rectangle::at_origin(1, 2)?,
		Rectangle::new(3, 4, Position::new(5, 6))?,
	]
	.into();
	let v = Vector::new(2, -2);
	let there = &rects + v;
	let back = there + Vector::new(-2, 2);
	assert_eq!(back, rects);
	Ok(())
}

#[test]
fn merge_free_functions_are_exported() -> Result<()> {
	let (left, right) = Rectangle::at_origin(10, 3)?.split_vertically(4)?;
	assert_eq!(merge_vertically(left, right)?, Rectangle::at_origin(10, 3)?);
	let err = merge_horizontally(left, right).unwrap_err();
	assert!(matches!(err, GeometryError::ExtentMismatch { axis: Axis::Horizontal, .. }));
	Ok(())
}
