//! 2D primitives and spatial queries.
//!
//! Purpose
//! - Immutable value types (`Line2`, `Segment2`, `Triangle2`, `Rect2`,
//!   `Polygon2`) with containment, distance, intersection, and clipping
//!   operations.
//! - Absence of a result (parallel lines, disjoint segments, fully clipped
//!   polygon) is `None`, never a NaN or sentinel.

mod polygon;
mod types;

pub use polygon::Polygon2;
pub use types::{Line2, Rect2, Segment2, Triangle2};

#[cfg(test)]
mod tests;
