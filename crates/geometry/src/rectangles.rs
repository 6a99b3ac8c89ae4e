use crate::rectangle::Rectangle;
use crate::vector::Vector;

/// An ordered collection of rectangles.
///
/// Translation applies to every element. Equality is elementwise and order-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rectangles {
	items: Vec<Rectangle>,
}

impl Rectangles {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a rectangle.
	pub fn push(&mut self, rect: Rectangle) {
		self.items.push(rect);
	}

	/// Returns the number of rectangles.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the collection holds no rectangles.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterates over the rectangles in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
		self.items.iter()
	}

	/// Returns the rectangles as a slice.
	pub fn as_slice(&self) -> &[Rectangle] {
		&self.items
	}

	/// Sum of the areas of all rectangles. Overlaps are counted twice.
	pub fn total_area(&self) -> i64 {
		self.items.iter().map(Rectangle::area).sum()
	}

	/// Translates every rectangle by `vec` in place.
	///
	/// Returns `self` so calls can be chained.
	pub fn accumulate(&mut self, vec: Vector) -> &mut Self {
		for rect in &mut self.items {
			rect.accumulate(vec);
		}
		self
	}
}

impl From<Vec<Rectangle>> for Rectangles {
	fn from(items: Vec<Rectangle>) -> Self {
		Self { items }
	}
}

impl FromIterator<Rectangle> for Rectangles {
	fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

impl Extend<Rectangle> for Rectangles {
	fn extend<I: IntoIterator<Item = Rectangle>>(&mut self, iter: I) {
		self.items.extend(iter);
	}
}

impl IntoIterator for Rectangles {
	type Item = Rectangle;
	type IntoIter = std::vec::IntoIter<Rectangle>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a Rectangles {
	type Item = &'a Rectangle;
	type IntoIter = std::slice::Iter<'a, Rectangle>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
