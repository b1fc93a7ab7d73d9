//! Point type, orientation predicate, and the lexicographic point order.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Integer point `(x, y)`.
pub type Point = Vector2<i32>;

/// Classification of `orientation(a, b, c)` by sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// `c` strictly right of `a→b`.
    Clockwise,
    Collinear,
    /// `c` strictly left of `a→b`.
    CounterClockwise,
}

/// Signed doubled area of the triangle `(a, b, c)`:
/// `(b.x−a.x)·(c.y−a.y) − (b.y−a.y)·(c.x−a.x)`.
///
/// Positive for a counterclockwise turn, zero when collinear, negative for a
/// clockwise turn. Exact for all `i32` inputs.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> i128 {
    let abx = b.x as i128 - a.x as i128;
    let aby = b.y as i128 - a.y as i128;
    let acx = c.x as i128 - a.x as i128;
    let acy = c.y as i128 - a.y as i128;
    abx * acy - aby * acx
}

/// Sign of [`orientation`] as a `Turn`.
#[inline]
pub fn turn(a: Point, b: Point, c: Point) -> Turn {
    match orientation(a, b, c).cmp(&0) {
        Ordering::Greater => Turn::CounterClockwise,
        Ordering::Equal => Turn::Collinear,
        Ordering::Less => Turn::Clockwise,
    }
}

/// Total order: x ascending, ties broken by y ascending.
#[inline]
pub fn point_order(a: &Point, b: &Point) -> Ordering {
    a.x.cmp(&b.x).then(a.y.cmp(&b.y))
}

/// Stable sort by [`point_order`].
#[inline]
pub fn sort_points(points: &mut [Point]) {
    points.sort_by(point_order);
}

/// Squared Euclidean distance, exact.
#[inline]
pub fn squared_distance(a: Point, b: Point) -> i128 {
    let dx = b.x as i128 - a.x as i128;
    let dy = b.y as i128 - a.y as i128;
    dx * dx + dy * dy
}
