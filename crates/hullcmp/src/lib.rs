//! Convex hulls of integer point sets, computed two ways.
//!
//! - `brute_force`: O(n³) edge enumeration plus a trace of the valid edges.
//! - `monotone_chain`: Andrew's O(n log n) upper/lower chain construction.
//! - `telemetry`: per-algorithm primitive-operation counters for comparison.
//! - `session`: owns a point set, both results, and the auto-run configuration.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<i32>`; predicates are exact (128-bit integers).
//! - Both builders return hulls in clockwise order (y-axis up).
//! - No builder fails: every point set, however degenerate, yields a result.

pub mod api;
pub mod brute_force;
pub mod geom2;
pub mod monotone_chain;
pub mod session;
pub mod telemetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{orientation, point_order, Point, Turn};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::brute_force::{brute_force_hull, BruteForceRun, DirectedEdge, TraceCfg, TraceRule};
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
    pub use crate::geom2::{orientation, point_order, turn, Point, Turn};
    pub use crate::monotone_chain::{
        monotone_chain_hull, monotone_chain_hull_snapshot, MonotoneChainRun,
    };
    pub use crate::session::{Algorithm, AutoMode, HullResult, Session, SessionCfg, SortPolicy};
    pub use crate::telemetry::RunCounter;
}

#[cfg(test)]
mod tests;
