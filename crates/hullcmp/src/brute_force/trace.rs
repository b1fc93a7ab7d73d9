//! Walk a valid-edge set into a hull polygon.

use crate::geom2::{point_order, squared_distance, Point};

use super::types::{DirectedEdge, TraceCfg, TraceRule};

/// Trace the hull from the smallest edge start point (by `point_order`).
///
/// Stops when the next edge closes the loop, when no edge leaves the current
/// point, or when the next point is already on the hull. Empty edge set gives
/// an empty hull. Zero-length edges between duplicate points are never
/// followed.
pub fn trace_hull(edges: &[DirectedEdge], cfg: TraceCfg) -> Vec<Point> {
    let Some(start) = edges.iter().map(|e| e.from).min_by(point_order) else {
        return Vec::new();
    };
    let mut hull = vec![start];
    let mut current = start;
    while let Some(edge) = next_edge(edges, current, cfg.rule) {
        if edge.to == start || hull.contains(&edge.to) {
            break;
        }
        hull.push(edge.to);
        current = edge.to;
    }
    hull
}

fn next_edge(edges: &[DirectedEdge], from: Point, rule: TraceRule) -> Option<&DirectedEdge> {
    let mut outgoing = edges.iter().filter(|e| e.from == from && e.to != from);
    match rule {
        TraceRule::FirstMatch => outgoing.next(),
        TraceRule::Farthest => outgoing.fold(None, |best: Option<&DirectedEdge>, e| match best {
            Some(b) if squared_distance(from, b.to) >= squared_distance(from, e.to) => Some(b),
            _ => Some(e),
        }),
    }
}
