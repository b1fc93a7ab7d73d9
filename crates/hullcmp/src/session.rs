//! Headless point canvas: owns the point set, both results, and the auto-run mode.
//!
//! Purpose
//! - The state a drawing front end needs: append points one at a time, run
//!   either builder on demand or automatically after each append, read back
//!   hulls, edges, chains, and counters, clear everything.
//!
//! Behavior
//! - `append_point` clears both results and counters, then runs whatever the
//!   configured `AutoMode` selects.
//! - An explicit run clears the other algorithm's result (one hull is shown at
//!   a time) but never touches the other algorithm's counter.
//! - With `SortPolicy::InPlace` a monotone-chain run leaves the session's
//!   points sorted; `SortPolicy::Snapshot` keeps insertion order.
//! - `press` is the run button: toggle "`algo` only" auto mode, then run `algo`
//!   once regardless of the resulting mode.
//! - All state is owned here; run modes are configuration, not globals.

use crate::brute_force::{brute_force_hull_with, BruteForceRun, DirectedEdge, TraceCfg};
use crate::geom2::Point;
use crate::monotone_chain::{monotone_chain_hull, monotone_chain_hull_snapshot, MonotoneChainRun};
use crate::telemetry::RunCounter;

/// Hull algorithm tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    MonotoneChain,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BruteForce, Algorithm::MonotoneChain];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute_force",
            Algorithm::MonotoneChain => "monotone_chain",
        }
    }
}

/// Which builders run automatically after each appended point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoMode {
    #[default]
    None,
    BruteForceOnly,
    MonotoneChainOnly,
    Both,
}

impl AutoMode {
    #[inline]
    pub fn runs(self, algo: Algorithm) -> bool {
        matches!(
            (self, algo),
            (AutoMode::Both, _)
                | (AutoMode::BruteForceOnly, Algorithm::BruteForce)
                | (AutoMode::MonotoneChainOnly, Algorithm::MonotoneChain)
        )
    }

    fn only(algo: Algorithm) -> Self {
        match algo {
            Algorithm::BruteForce => AutoMode::BruteForceOnly,
            Algorithm::MonotoneChain => AutoMode::MonotoneChainOnly,
        }
    }
}

/// Whether the monotone chain may reorder the session's points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortPolicy {
    #[default]
    InPlace,
    Snapshot,
}

/// Session configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionCfg {
    pub auto: AutoMode,
    pub sort: SortPolicy,
    pub trace: TraceCfg,
}

/// Hull plus counter, the part of a run both algorithms share.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HullResult {
    pub hull: Vec<Point>,
    pub counter: RunCounter,
}

impl From<&BruteForceRun> for HullResult {
    fn from(run: &BruteForceRun) -> Self {
        Self {
            hull: run.hull.clone(),
            counter: run.counter,
        }
    }
}

impl From<&MonotoneChainRun> for HullResult {
    fn from(run: &MonotoneChainRun) -> Self {
        Self {
            hull: run.hull.clone(),
            counter: run.counter,
        }
    }
}

/// Point set plus the most recent result of each builder.
#[derive(Clone, Debug, Default)]
pub struct Session {
    cfg: SessionCfg,
    points: Vec<Point>,
    brute: BruteForceRun,
    chain: MonotoneChainRun,
}

impl Session {
    pub fn new(cfg: SessionCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    /// Session preloaded with `points`; nothing is run.
    pub fn with_points(cfg: SessionCfg, points: Vec<Point>) -> Self {
        Self {
            cfg,
            points,
            ..Self::default()
        }
    }

    #[inline]
    pub fn cfg(&self) -> SessionCfg {
        self.cfg
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Append a point, drop stale results, then auto-run per `AutoMode`.
    pub fn append_point(&mut self, p: Point) {
        self.points.push(p);
        self.reset_results();
        if self.cfg.auto.runs(Algorithm::BruteForce) {
            self.run_brute_force();
        }
        if self.cfg.auto.runs(Algorithm::MonotoneChain) {
            self.run_monotone_chain();
        }
    }

    /// Empty the point set and every derived value.
    pub fn clear(&mut self) {
        self.points.clear();
        self.reset_results();
        tracing::debug!("session cleared");
    }

    fn reset_results(&mut self) {
        self.brute = BruteForceRun::default();
        self.chain = MonotoneChainRun::default();
    }

    /// Run the brute-force builder; the chain result is cleared, its counter kept.
    pub fn run_brute_force(&mut self) -> HullResult {
        self.clear_chain_result();
        self.brute = brute_force_hull_with(&self.points, self.cfg.trace);
        HullResult::from(&self.brute)
    }

    /// Run the monotone-chain builder; the brute-force result is cleared, its
    /// counter kept. Sorts the session's points under `SortPolicy::InPlace`.
    pub fn run_monotone_chain(&mut self) -> HullResult {
        self.clear_brute_result();
        self.chain = match self.cfg.sort {
            SortPolicy::InPlace => monotone_chain_hull(&mut self.points),
            SortPolicy::Snapshot => monotone_chain_hull_snapshot(&self.points),
        };
        HullResult::from(&self.chain)
    }

    /// Run one algorithm by tag.
    pub fn run(&mut self, algo: Algorithm) -> HullResult {
        match algo {
            Algorithm::BruteForce => self.run_brute_force(),
            Algorithm::MonotoneChain => self.run_monotone_chain(),
        }
    }

    fn clear_brute_result(&mut self) {
        self.brute.hull.clear();
        self.brute.edges.clear();
    }

    fn clear_chain_result(&mut self) {
        self.chain.hull.clear();
        self.chain.upper.clear();
        self.chain.lower.clear();
    }

    /// Replace the auto mode. Existing results are kept.
    pub fn set_auto(&mut self, mode: AutoMode) {
        self.cfg.auto = mode;
    }

    /// Toggle between "`algo` only" and no auto-run. Entering the single-algorithm
    /// mode drops the other algorithm's result and unsets its counter.
    pub fn toggle_auto(&mut self, algo: Algorithm) -> AutoMode {
        let only = AutoMode::only(algo);
        self.cfg.auto = if self.cfg.auto == only {
            AutoMode::None
        } else {
            only
        };
        if self.cfg.auto == only {
            match algo {
                Algorithm::BruteForce => {
                    self.chain = MonotoneChainRun::default();
                }
                Algorithm::MonotoneChain => {
                    self.brute = BruteForceRun::default();
                }
            }
        }
        self.cfg.auto
    }

    /// Button press: `toggle_auto(algo)` followed by one run of `algo`.
    pub fn press(&mut self, algo: Algorithm) -> HullResult {
        let mode = self.toggle_auto(algo);
        tracing::debug!(algorithm = algo.name(), ?mode, "press");
        self.run(algo)
    }

    pub fn set_sort_policy(&mut self, sort: SortPolicy) {
        self.cfg.sort = sort;
    }

    pub fn set_trace(&mut self, trace: TraceCfg) {
        self.cfg.trace = trace;
    }

    /// Last result of `algo` (empty hull, unset counter if not run).
    pub fn result(&self, algo: Algorithm) -> HullResult {
        match algo {
            Algorithm::BruteForce => HullResult::from(&self.brute),
            Algorithm::MonotoneChain => HullResult::from(&self.chain),
        }
    }

    #[inline]
    pub fn brute_force(&self) -> &BruteForceRun {
        &self.brute
    }

    #[inline]
    pub fn monotone_chain(&self) -> &MonotoneChainRun {
        &self.chain
    }

    #[inline]
    pub fn edges(&self) -> &[DirectedEdge] {
        &self.brute.edges
    }

    #[inline]
    pub fn counter(&self, algo: Algorithm) -> RunCounter {
        match algo {
            Algorithm::BruteForce => self.brute.counter,
            Algorithm::MonotoneChain => self.chain.counter,
        }
    }

    /// `"Iterations (hull / slow): <chain> / <brute>"`, `-` for unset counters.
    pub fn status_line(&self) -> String {
        format!(
            "Iterations (hull / slow): {} / {}",
            self.chain.counter, self.brute.counter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute_force::TraceRule;
    use nalgebra::vector;

    fn square_with_center() -> Vec<Point> {
        vec![vector![0, 0], vector![4, 0], vector![4, 4], vector![0, 4], vector![2, 2]]
    }

    fn corners_cw() -> Vec<Point> {
        vec![vector![0, 0], vector![0, 4], vector![4, 4], vector![4, 0]]
    }

    #[test]
    fn fresh_session_is_unset() {
        let s = Session::default();
        assert_eq!(s.point_count(), 0);
        for algo in Algorithm::ALL {
            assert!(!s.counter(algo).is_set());
            assert!(s.result(algo).hull.is_empty());
        }
        assert_eq!(s.status_line(), "Iterations (hull / slow): - / -");
    }

    #[test]
    fn explicit_runs_keep_other_counter() {
        let mut s = Session::with_points(SessionCfg::default(), square_with_center());
        let brute = s.run_brute_force();
        assert_eq!(brute.hull, corners_cw());
        assert_eq!(brute.counter.get(), Some(20));
        assert_eq!(s.edges().len(), 4);

        let chain = s.run_monotone_chain();
        assert_eq!(chain.hull, corners_cw());
        assert_eq!(chain.counter.get(), Some(4));
        // Brute-force result dropped, its counter kept.
        assert!(s.brute_force().hull.is_empty());
        assert!(s.edges().is_empty());
        assert_eq!(s.counter(Algorithm::BruteForce).get(), Some(20));
        assert_eq!(s.status_line(), "Iterations (hull / slow): 4 / 20");

        s.run(Algorithm::BruteForce);
        assert!(s.monotone_chain().hull.is_empty());
        assert_eq!(s.counter(Algorithm::MonotoneChain).get(), Some(4));
    }

    #[test]
    fn chain_sorts_points_unless_snapshot() {
        let mut s = Session::with_points(SessionCfg::default(), square_with_center());
        s.run_monotone_chain();
        assert_eq!(
            s.points(),
            &[vector![0, 0], vector![0, 4], vector![2, 2], vector![4, 0], vector![4, 4]]
        );

        let cfg = SessionCfg {
            sort: SortPolicy::Snapshot,
            ..SessionCfg::default()
        };
        let mut s = Session::with_points(cfg, square_with_center());
        let r = s.run_monotone_chain();
        assert_eq!(r.hull, corners_cw());
        assert_eq!(s.points(), square_with_center().as_slice());
    }

    #[test]
    fn append_resets_then_auto_runs() {
        let mut s = Session::new(SessionCfg {
            auto: AutoMode::Both,
            ..SessionCfg::default()
        });
        for p in square_with_center() {
            s.append_point(p);
        }
        // Both ran; the chain ran last, so only its hull is shown.
        assert_eq!(s.counter(Algorithm::BruteForce).get(), Some(20));
        assert_eq!(s.result(Algorithm::MonotoneChain).hull, corners_cw());

        s.set_auto(AutoMode::None);
        s.append_point(vector![9, 9]);
        assert_eq!(s.point_count(), 6);
        assert!(!s.counter(Algorithm::BruteForce).is_set());
        assert!(!s.counter(Algorithm::MonotoneChain).is_set());
    }

    #[test]
    fn brute_only_auto_mode() {
        let mut s = Session::new(SessionCfg {
            auto: AutoMode::BruteForceOnly,
            ..SessionCfg::default()
        });
        s.append_point(vector![0, 0]);
        assert_eq!(s.counter(Algorithm::BruteForce).get(), Some(0));
        s.append_point(vector![3, 0]);
        s.append_point(vector![0, 3]);
        assert_eq!(s.counter(Algorithm::BruteForce).get(), Some(6));
        assert_eq!(s.brute_force().hull.len(), 3);
        assert!(!s.counter(Algorithm::MonotoneChain).is_set());
    }

    #[test]
    fn toggle_auto_switches_and_clears_other() {
        let mut s = Session::with_points(SessionCfg::default(), square_with_center());
        s.run_brute_force();
        s.run_monotone_chain();
        assert_eq!(s.toggle_auto(Algorithm::MonotoneChain), AutoMode::MonotoneChainOnly);
        assert!(!s.counter(Algorithm::BruteForce).is_set());
        assert!(s.counter(Algorithm::MonotoneChain).is_set());
        assert_eq!(s.toggle_auto(Algorithm::MonotoneChain), AutoMode::None);
        assert!(s.counter(Algorithm::MonotoneChain).is_set());
        assert_eq!(s.toggle_auto(Algorithm::BruteForce), AutoMode::BruteForceOnly);
        assert!(!s.counter(Algorithm::MonotoneChain).is_set());
    }

    #[test]
    fn press_toggles_then_runs_once() {
        let mut s = Session::with_points(SessionCfg::default(), square_with_center());
        let r = s.press(Algorithm::BruteForce);
        assert_eq!(s.cfg().auto, AutoMode::BruteForceOnly);
        assert_eq!(r.hull, corners_cw());
        assert_eq!(r.counter.get(), Some(20));

        // Second press leaves auto mode but still runs.
        let r = s.press(Algorithm::BruteForce);
        assert_eq!(s.cfg().auto, AutoMode::None);
        assert_eq!(r.counter.get(), Some(20));

        // Switching buttons drops the brute-force result and counter, then
        // appends auto-run the chain only.
        s.press(Algorithm::MonotoneChain);
        assert_eq!(s.cfg().auto, AutoMode::MonotoneChainOnly);
        assert!(!s.counter(Algorithm::BruteForce).is_set());
        s.append_point(vector![9, 9]);
        assert!(s.counter(Algorithm::MonotoneChain).is_set());
        assert!(!s.counter(Algorithm::BruteForce).is_set());
        assert_eq!(s.monotone_chain().hull.len(), 4);
    }

    #[test]
    fn sort_policy_can_change_between_runs() {
        let mut s = Session::with_points(SessionCfg::default(), square_with_center());
        s.set_sort_policy(SortPolicy::Snapshot);
        s.run_monotone_chain();
        assert_eq!(s.points(), square_with_center().as_slice());
        s.set_sort_policy(SortPolicy::InPlace);
        s.run_monotone_chain();
        assert_eq!(s.points()[1], vector![0, 4]);
    }

    #[test]
    fn clear_reverts_everything() {
        let mut s = Session::with_points(SessionCfg::default(), square_with_center());
        s.run_brute_force();
        s.run_monotone_chain();
        s.clear();
        assert_eq!(s.point_count(), 0);
        assert!(s.edges().is_empty());
        for algo in Algorithm::ALL {
            assert!(s.result(algo).hull.is_empty());
            assert!(!s.counter(algo).is_set());
        }
        assert!(s.monotone_chain().upper.is_empty());
    }

    #[test]
    fn trace_rule_is_configurable() {
        let pts = vec![vector![0, 0], vector![0, 2], vector![0, 4], vector![4, 4], vector![4, 0]];
        let mut s = Session::with_points(SessionCfg::default(), pts);
        assert_eq!(s.run_brute_force().hull.len(), 5);
        s.set_trace(TraceCfg {
            rule: TraceRule::Farthest,
        });
        assert_eq!(s.run_brute_force().hull, corners_cw());
    }
}
