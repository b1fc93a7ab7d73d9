//! Data types for the brute-force builder.

use crate::geom2::Point;
use crate::telemetry::RunCounter;

/// Segment `from→to` with every other input point on its clockwise side or
/// collinear with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    pub from: Point,
    pub to: Point,
}

impl DirectedEdge {
    #[inline]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Choice of outgoing edge when the trace finds several leaving one point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceRule {
    /// First matching edge in enumeration order (pair-major by input index).
    #[default]
    FirstMatch,
    /// Matching edge whose end is farthest from the current point. Skips
    /// collinear boundary points, so the hull holds only extreme vertices.
    Farthest,
}

/// Trace configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceCfg {
    pub rule: TraceRule,
}

/// Result of one brute-force run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BruteForceRun {
    /// Clockwise hull, starting at the smallest edge start point.
    pub hull: Vec<Point>,
    /// All valid edges, in enumeration order.
    pub edges: Vec<DirectedEdge>,
    /// Ordered pairs tested.
    pub counter: RunCounter,
}
