//! Andrew's monotone chain (returns hull in CW order, y-axis up).
//!
//! Purpose
//! - The efficient O(n log n) builder, compared against `brute_force`.
//!
//! Notes
//! - `monotone_chain_hull` sorts the caller's slice in place by `point_order`.
//!   Anything else reading the same storage afterwards sees the sorted order.
//!   `monotone_chain_hull_snapshot` sorts a private copy instead.
//! - The counter is the number of chain removals (points popped because the
//!   last three made a collinear or counterclockwise turn), summed over both
//!   chains.
//! - Collinear and duplicate points are removed, so the hull holds only
//!   extreme vertices. For `n <= 2` the sorted input is returned as is.

use crate::geom2::{orientation, sort_points, Point};
use crate::telemetry::RunCounter;

/// Result of one monotone-chain run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonotoneChainRun {
    /// Upper chain followed by the trimmed lower chain.
    pub hull: Vec<Point>,
    /// Left-to-right chain over the top.
    pub upper: Vec<Point>,
    /// Right-to-left chain along the bottom, without its two endpoints.
    pub lower: Vec<Point>,
    /// Chain removals.
    pub counter: RunCounter,
}

/// Sort `points` in place, then build the hull.
pub fn monotone_chain_hull(points: &mut [Point]) -> MonotoneChainRun {
    sort_points(points);
    hull_of_sorted(points)
}

/// Build the hull from a sorted copy; `points` is left untouched.
pub fn monotone_chain_hull_snapshot(points: &[Point]) -> MonotoneChainRun {
    let mut pts = points.to_vec();
    sort_points(&mut pts);
    hull_of_sorted(&pts)
}

fn hull_of_sorted(pts: &[Point]) -> MonotoneChainRun {
    let mut counter = RunCounter::unset();
    counter.reset();
    if pts.len() <= 2 {
        return MonotoneChainRun {
            hull: pts.to_vec(),
            upper: Vec::new(),
            lower: Vec::new(),
            counter,
        };
    }
    let upper = build_chain(pts.iter().copied(), pts.len(), &mut counter);
    let mut lower = build_chain(pts.iter().rev().copied(), pts.len(), &mut counter);
    // Both ends duplicate the extreme points already on the upper chain.
    lower.pop();
    if !lower.is_empty() {
        lower.remove(0);
    }
    let mut hull = Vec::with_capacity(upper.len() + lower.len());
    hull.extend_from_slice(&upper);
    hull.extend_from_slice(&lower);
    tracing::debug!(
        n = pts.len(),
        upper = upper.len(),
        lower = lower.len(),
        removals = %counter,
        "monotone_chain_hull"
    );
    MonotoneChainRun {
        hull,
        upper,
        lower,
        counter,
    }
}

/// Keep only clockwise turns: after each push, drop the middle of the last
/// three while they turn counterclockwise or are collinear.
fn build_chain(
    pts: impl Iterator<Item = Point>,
    cap: usize,
    counter: &mut RunCounter,
) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::with_capacity(cap);
    for p in pts {
        chain.push(p);
        while chain.len() >= 3 {
            let k = chain.len();
            if orientation(chain[k - 3], chain[k - 2], chain[k - 1]) < 0 {
                break;
            }
            chain.remove(k - 2);
            counter.bump();
        }
    }
    chain
}
