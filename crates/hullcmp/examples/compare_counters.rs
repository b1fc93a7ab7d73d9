//! Print hull sizes and operation counters of both builders on random clouds.
//!
//! Usage:
//!   cargo run -p hullcmp --example compare_counters -- [disk|square|collinear]

use hullcmp::api::{
    draw_cloud, Algorithm, CloudCfg, CloudReplay, CloudShape, PointCount, Session, SessionCfg,
};

fn main() {
    let shape = match std::env::args().nth(1).as_deref() {
        None | Some("disk") => CloudShape::Disk,
        Some("square") => CloudShape::Square,
        Some("collinear") => CloudShape::Collinear,
        Some(other) => {
            eprintln!("usage: compare_counters [disk|square|collinear] (got {other})");
            return;
        }
    };
    for n in [4usize, 8, 16, 32, 64, 128] {
        let cfg = CloudCfg {
            count: PointCount::Fixed(n),
            half_width: 1000,
            shape,
        };
        let pts = match draw_cloud(cfg, CloudReplay { seed: 2025, index: n as u64 }) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };
        let mut session = Session::with_points(SessionCfg::default(), pts);
        let brute = session.run(Algorithm::BruteForce);
        let chain = session.run(Algorithm::MonotoneChain);
        println!(
            "n={n:4}  hull(brute)={:3}  hull(chain)={:3}  {}",
            brute.hull.len(),
            chain.hull.len(),
            session.status_line()
        );
    }
}
