use super::Vector;

#[test]
fn coordinates_are_readable() {
	let v = Vector::new(3, -4);
	assert_eq!(v.x(), 3);
	assert_eq!(v.y(), -4);
}

#[test]
fn reflection_swaps_components() {
	assert_eq!(Vector::new(1, 2).reflection(), Vector::new(2, 1));
	assert_eq!(Vector::new(-5, 0).reflection(), Vector::new(0, -5));
}

#[test]
fn accumulate_chains_in_place() {
	let mut v = Vector::new(1, 1);
	v.accumulate(Vector::new(2, 3)).accumulate(Vector::new(-1, 0));
	assert_eq!(v, Vector::new(2, 4));
}

#[test]
fn add_assign_matches_accumulate() {
	let mut a = Vector::new(7, 8);
	let mut b = a;
	a += Vector::new(1, -1);
	b.accumulate(Vector::new(1, -1));
	assert_eq!(a, b);
}

#[test]
fn display_uses_brackets() {
	assert_eq!(Vector::new(4, -2).to_string(), "[4, -2]");
}
