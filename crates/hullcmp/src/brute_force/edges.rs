//! Edge enumeration (the O(n³) part).

use crate::geom2::{orientation, Point};
use crate::telemetry::RunCounter;

use super::types::DirectedEdge;

/// All ordered pairs of distinct indices `(i, j)` such that no other point is
/// strictly left of `points[i]→points[j]`.
///
/// `counter` is bumped once per pair tested, whether or not the inner scan
/// short-circuits.
pub fn valid_edges(points: &[Point], counter: &mut RunCounter) -> Vec<DirectedEdge> {
    let n = points.len();
    let mut edges = Vec::new();
    for (i, &p) in points.iter().enumerate() {
        for (j, &q) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let valid = (0..n)
                .filter(|&k| k != i && k != j)
                .all(|k| orientation(p, q, points[k]) <= 0);
            counter.bump();
            if valid {
                edges.push(DirectedEdge::new(p, q));
            }
        }
    }
    edges
}
