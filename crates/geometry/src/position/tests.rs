use std::thread;

use super::Position;
use crate::vector::Vector;

#[test]
fn origin_is_zero() {
	assert_eq!(*Position::origin(), Position::new(0, 0));
}

#[test]
fn origin_is_a_single_instance() {
	assert!(std::ptr::eq(Position::origin(), Position::origin()));
}

#[test]
fn origin_is_shared_across_threads() {
	let addr = Position::origin() as *const Position as usize;
	let other = thread::spawn(|| Position::origin() as *const Position as usize)
		.join()
		.unwrap();
	assert_eq!(addr, other);
}

#[test]
fn reflection_swaps_coordinates() {
	let p = Position::new(3, 9);
	let r = p.reflection();
	assert_eq!(r.x(), p.y());
	assert_eq!(r.y(), p.x());
}

#[test]
fn origin_reflects_to_itself() {
	assert_eq!(Position::origin().reflection(), *Position::origin());
}

#[test]
fn accumulate_translates_in_place() {
	let mut p = Position::new(1, 2);
	p.accumulate(Vector::new(10, 20))
		.accumulate(Vector::new(-1, -2));
	assert_eq!(p, Position::new(10, 20));
}

#[test]
fn copying_origin_does_not_touch_it() {
	let mut p = *Position::origin();
	p += Vector::new(5, 5);
	assert_eq!(p, Position::new(5, 5));
	assert_eq!(*Position::origin(), Position::new(0, 0));
}

#[test]
fn display_uses_parentheses() {
	assert_eq!(Position::new(-1, 7).to_string(), "(-1, 7)");
}
