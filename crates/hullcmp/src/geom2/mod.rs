//! Exact 2D integer geometry shared by both hull builders.
//!
//! Purpose
//! - One orientation predicate and one point order, used by every builder so
//!   that hulls come out with the same (clockwise) orientation and can be
//!   compared directly.
//!
//! Conventions
//! - `Point = Vector2<i32>`; equality is exact coordinate equality.
//! - `orientation(a, b, c) > 0` means `c` is strictly left of `a→b` (CCW turn).
//! - Arithmetic widens to `i128`, so the full `i32` range is exact.

pub mod rand;
mod types;

pub use types::{orientation, point_order, sort_points, squared_distance, turn, Point, Turn};
