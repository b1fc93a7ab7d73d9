//! Brute-force convex hull: enumerate ordered pairs, keep valid edges, trace.
//!
//! Purpose
//! - The deliberately slow O(n³) reference builder. Every ordered pair of
//!   distinct indices `(p, q)` is tested against all other points; the pair is
//!   a hull edge iff no point lies strictly left of `p→q`. The valid edges are
//!   then walked from the lexicographically smallest start point.
//!
//! Notes
//! - The pair counter is exactly `n·(n−1)` for `n` points.
//! - Degenerate inputs (collinear, duplicates) can produce edge sets that do not
//!   form one cycle. The trace stops at a dead end or at a revisit and returns
//!   the partial hull; this is normal termination.
//! - Duplicate points yield zero-length edges. They stay in the edge set (the
//!   pair was tested and is valid) but the trace never follows them.
//! - Which outgoing edge the trace follows when several leave the same point
//!   is selected by `TraceRule`.
//!
//! Layout: `types.rs` (data types), `edges.rs` (enumeration), `trace.rs` (walk).

mod edges;
mod trace;
mod types;

pub use edges::valid_edges;
pub use trace::trace_hull;
pub use types::{BruteForceRun, DirectedEdge, TraceCfg, TraceRule};

use crate::geom2::Point;
use crate::telemetry::RunCounter;

/// Run the brute-force builder with the default trace rule.
pub fn brute_force_hull(points: &[Point]) -> BruteForceRun {
    brute_force_hull_with(points, TraceCfg::default())
}

/// Run the brute-force builder with an explicit trace configuration.
pub fn brute_force_hull_with(points: &[Point], cfg: TraceCfg) -> BruteForceRun {
    let mut counter = RunCounter::unset();
    counter.reset();
    if points.is_empty() {
        return BruteForceRun {
            hull: Vec::new(),
            edges: Vec::new(),
            counter,
        };
    }
    let edges = valid_edges(points, &mut counter);
    let hull = trace_hull(&edges, cfg);
    tracing::debug!(
        n = points.len(),
        edges = edges.len(),
        hull = hull.len(),
        pairs = %counter,
        "brute_force_hull"
    );
    BruteForceRun {
        hull,
        edges,
        counter,
    }
}
