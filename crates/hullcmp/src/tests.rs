//! Cross-checks between the two builders.

use std::collections::BTreeSet;

use nalgebra::vector;
use proptest::prelude::*;

use crate::brute_force::{brute_force_hull, brute_force_hull_with, TraceCfg, TraceRule};
use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
use crate::geom2::{sort_points, Point};
use crate::monotone_chain::{monotone_chain_hull, monotone_chain_hull_snapshot};

fn farthest() -> TraceCfg {
    TraceCfg {
        rule: TraceRule::Farthest,
    }
}

fn dedup_sorted(mut pts: Vec<Point>) -> Vec<Point> {
    sort_points(&mut pts);
    pts.dedup();
    pts
}

fn as_set(pts: &[Point]) -> BTreeSet<(i32, i32)> {
    pts.iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn square_scenario_agrees() {
    let pts = vec![vector![0, 0], vector![4, 0], vector![4, 4], vector![0, 4], vector![2, 2]];
    let brute = brute_force_hull(&pts);
    let mut sorted = pts.clone();
    let chain = monotone_chain_hull(&mut sorted);
    let corners = vec![vector![0, 0], vector![0, 4], vector![4, 4], vector![4, 0]];
    assert_eq!(brute.hull, corners);
    assert_eq!(chain.hull, corners);
}

#[test]
fn random_general_clouds_agree() {
    for index in 0..20 {
        let cfg = CloudCfg {
            count: PointCount::Uniform { min: 3, max: 40 },
            half_width: 200,
            shape: CloudShape::Disk,
        };
        let pts = dedup_sorted(draw_cloud(cfg, ReplayToken { seed: 77, index }).unwrap());
        let brute = brute_force_hull_with(&pts, farthest());
        let chain = monotone_chain_hull_snapshot(&pts);
        assert_eq!(brute.hull, chain.hull, "cloud index {index}");
        let n = pts.len() as u64;
        assert_eq!(brute.counter.get(), Some(n * (n - 1)));
    }
}

#[test]
fn collinear_clouds_reduce_to_extremes() {
    let cfg = CloudCfg {
        count: PointCount::Fixed(12),
        half_width: 60,
        shape: CloudShape::Collinear,
    };
    let pts = dedup_sorted(draw_cloud(cfg, ReplayToken { seed: 4, index: 0 }).unwrap());
    if pts.len() >= 2 {
        let ends = vec![pts[0], pts[pts.len() - 1]];
        assert_eq!(monotone_chain_hull_snapshot(&pts).hull, ends);
        assert_eq!(brute_force_hull_with(&pts, farthest()).hull, ends);
        // First-match walks along the line but stays finite and on it.
        let first = brute_force_hull(&pts);
        assert!(first.hull.len() <= pts.len());
    }
}

proptest! {
    #[test]
    fn hulls_match_on_distinct_points(raw in prop::collection::vec((-30i32..30, -30i32..30), 2..30)) {
        let pts = dedup_sorted(raw.into_iter().map(|(x, y)| vector![x, y]).collect());
        prop_assume!(pts.len() >= 2);
        let brute = brute_force_hull_with(&pts, farthest());
        let chain = monotone_chain_hull_snapshot(&pts);
        prop_assert_eq!(&brute.hull, &chain.hull);
    }

    #[test]
    fn first_match_hull_has_chain_vertices(raw in prop::collection::vec((-30i32..30, -30i32..30), 3..25)) {
        // Default tracing may also keep collinear boundary points; every
        // extreme vertex must still appear.
        let pts = dedup_sorted(raw.into_iter().map(|(x, y)| vector![x, y]).collect());
        let chain = monotone_chain_hull_snapshot(&pts);
        prop_assume!(chain.hull.len() >= 3);
        let brute = brute_force_hull(&pts);
        prop_assert!(as_set(&chain.hull).is_subset(&as_set(&brute.hull)));
    }

    #[test]
    fn brute_counter_counts_ordered_pairs(raw in prop::collection::vec((-5i32..5, -5i32..5), 0..20)) {
        let pts: Vec<Point> = raw.into_iter().map(|(x, y)| vector![x, y]).collect();
        let n = pts.len() as u64;
        let run = brute_force_hull(&pts);
        prop_assert_eq!(run.counter.get(), Some(n * n.saturating_sub(1)));
        prop_assert!(run.hull.len() <= pts.len());
    }

    #[test]
    fn chain_is_idempotent_after_sort(raw in prop::collection::vec((-50i32..50, -50i32..50), 0..60)) {
        let mut pts: Vec<Point> = raw.into_iter().map(|(x, y)| vector![x, y]).collect();
        let first = monotone_chain_hull(&mut pts);
        let sorted = pts.clone();
        let second = monotone_chain_hull(&mut pts);
        prop_assert_eq!(first, second);
        prop_assert_eq!(pts, sorted);
    }
}
