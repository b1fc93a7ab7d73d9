//! Curated internal API (UNSTABLE).
//!
//! Important
//! - A convenience surface for the CLI, benches, and examples. Breaking changes
//!   are allowed when they improve the design.

// Geometry primitives
pub use crate::geom2::{orientation, point_order, turn, Point, Turn};
// Random point clouds
pub use crate::geom2::rand::{
    draw_cloud, CloudCfg, CloudShape, GeneratorError, PointCount, ReplayToken as CloudReplay,
};
// Hull builders
pub use crate::brute_force::{
    brute_force_hull, brute_force_hull_with, trace_hull, valid_edges, BruteForceRun, DirectedEdge,
    TraceCfg, TraceRule,
};
pub use crate::monotone_chain::{
    monotone_chain_hull, monotone_chain_hull_snapshot, MonotoneChainRun,
};
// Session and telemetry
pub use crate::session::{Algorithm, AutoMode, HullResult, Session, SessionCfg, SortPolicy};
pub use crate::telemetry::RunCounter;
