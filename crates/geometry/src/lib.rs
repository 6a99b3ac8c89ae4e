//! Integer plane geometry: positions, displacement vectors and axis-aligned rectangles.
//!
//! All geometric types are small `Copy` values with structural equality. Translation
//! operators (`+`) always build a fresh value; the in-place counterparts are the
//! chainable `accumulate` methods and `+=`.

/// Cut-line orientation for split and merge operations.
pub mod direction;
/// Error types for rejected constructions, splits and merges.
pub mod error;
/// Merging edge-adjacent rectangles.
pub mod merge;
/// Translation operators between the geometric types.
mod ops;
/// Absolute points in the plane.
pub mod position;
/// Common re-exports for convenience.
pub mod prelude;
/// Axis-aligned rectangles with strictly positive size.
pub mod rectangle;
/// Ordered rectangle collections.
pub mod rectangles;
/// Displacement vectors.
pub mod vector;

pub use direction::Axis;
pub use error::{GeometryError, Result};
pub use merge::{merge, merge_horizontally, merge_vertically};
pub use position::Position;
pub use rectangle::Rectangle;
pub use rectangles::Rectangles;
pub use vector::Vector;
