//! Prelude for planar-geometry.
//!
//! Re-exports the most commonly used types.

pub use crate::direction::Axis;
pub use crate::error::{GeometryError, Result};
pub use crate::merge::{merge_horizontally, merge_vertically};
pub use crate::position::Position;
pub use crate::rectangle::Rectangle;
pub use crate::rectangles::Rectangles;
pub use crate::vector::Vector;
