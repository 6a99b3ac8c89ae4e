//! Wire format of the geometry types.

use planar_geometry::{Axis, Position, Rectangle, Rectangles, Vector};
use pretty_assertions::assert_eq;

#[test]
fn rectangle_roundtrip() {
	let r = Rectangle::new(3, 4, Position::new(1, 2)).unwrap();
	let json = serde_json::to_string(&r).unwrap();
	assert_eq!(
		json,
		r#"{"bottom_left":{"x":1,"y":2},"diagonal":{"dx":3,"dy":4}}"#
	);
	assert_eq!(serde_json::from_str::<Rectangle>(&json).unwrap(), r);
}

#[test]
fn deserialize_rejects_invalid_size() {
	let json = r#"{"bottom_left":{"x":0,"y":0},"diagonal":{"dx":0,"dy":5}}"#;
	let err = serde_json::from_str::<Rectangle>(json).unwrap_err();
	assert!(err.to_string().contains("invalid rectangle dimensions"));
}

#[test]
fn deserialize_rejects_corner_past_coordinate_range() {
	let json = format!(
		r#"{{"bottom_left":{{"x":0,"y":{}}},"diagonal":{{"dx":10,"dy":10}}}}"#,
		i32::MAX - 2
	);
	let err = serde_json::from_str::<Rectangle>(&json).unwrap_err();
	assert!(err.to_string().contains("extends past the coordinate range"));
}

#[test]
fn collection_is_a_plain_array() {
	let rects: Rectangles = vec![Rectangle::at_origin(1, 1).unwrap()].into();
	let json = serde_json::to_string(&rects).unwrap();
	assert!(json.starts_with('['));
	assert_eq!(serde_json::from_str::<Rectangles>(&json).unwrap(), rects);
}

#[test]
fn axis_and_vector_use_plain_names() {
	assert_eq!(serde_json::to_string(&Axis::Vertical).unwrap(), r#""vertical""#);
	assert_eq!(
		serde_json::to_string(&Vector::new(-1, 2)).unwrap(),
		r#"{"dx":-1,"dy":2}"#
	);
}
