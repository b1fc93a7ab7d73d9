//! JSON report written by `hullcmp run`.

use hullcmp::api::{Algorithm, Point, Session};
use serde::{Deserialize, Serialize};

use crate::points_io::to_pairs;

/// One algorithm's hull, counter, and intermediate structures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoReport {
    pub algorithm: String,
    pub hull: Vec<[i32; 2]>,
    /// `None` when the algorithm has not run.
    pub counter: Option<u64>,
    /// Brute force only: valid directed edges as `[from, to]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<[[i32; 2]; 2]>>,
    /// Monotone chain only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<Vec<[i32; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<Vec<[i32; 2]>>,
}

impl AlgoReport {
    /// Snapshot the session's current result for `algo`.
    pub fn capture(session: &Session, algo: Algorithm) -> Self {
        let result = session.result(algo);
        let mut rep = Self {
            algorithm: algo.name().to_string(),
            hull: to_pairs(&result.hull),
            counter: result.counter.get(),
            edges: None,
            upper: None,
            lower: None,
        };
        match algo {
            Algorithm::BruteForce => {
                rep.edges = Some(
                    session
                        .edges()
                        .iter()
                        .map(|e| [[e.from.x, e.from.y], [e.to.x, e.to.y]])
                        .collect(),
                );
            }
            Algorithm::MonotoneChain => {
                let run = session.monotone_chain();
                rep.upper = Some(to_pairs(&run.upper));
                rep.lower = Some(to_pairs(&run.lower));
            }
        }
        rep
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub version: String,
    /// Input points in insertion order.
    pub points: Vec<[i32; 2]>,
    /// Session points after the runs, present only if a run reordered them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorted_points: Option<Vec<[i32; 2]>>,
    pub results: Vec<AlgoReport>,
}

impl RunReport {
    pub fn new(input: &[Point], after: &[Point], results: Vec<AlgoReport>) -> Self {
        Self {
            version: hullcmp::VERSION.to_string(),
            points: to_pairs(input),
            sorted_points: (input != after).then(|| to_pairs(after)),
            results,
        }
    }
}
