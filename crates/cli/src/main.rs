use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hullcmp::api::{
    draw_cloud, Algorithm, AutoMode, CloudCfg, CloudReplay, CloudShape, Point, PointCount,
    Session, SessionCfg, SortPolicy, TraceCfg, TraceRule,
};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;
mod report;

use provenance::Sidecar;
use report::{AlgoReport, RunReport};
use std::path::Path;

#[derive(Parser)]
#[command(name = "hullcmp")]
#[command(about = "Convex hulls two ways: brute force vs monotone chain")]
struct Cmd {
    /// Emit per-run debug events from the hull builders
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute hulls for a point file and write a JSON report
    Run {
        #[arg(long, value_enum, default_value_t = AlgoArg::Both)]
        algo: AlgoArg,
        /// Points as .csv / .parquet (columns x, y) or .json (array of [x, y])
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[arg(long, value_enum, default_value_t = TraceArg::First)]
        trace: TraceArg,
        /// Run the monotone chain on a sorted copy instead of sorting the input
        #[arg(long)]
        snapshot: bool,
    },
    /// Write a reproducible random point cloud as JSON
    Random {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1000)]
        half_width: i32,
        #[arg(long, value_enum, default_value_t = ShapeArg::Disk)]
        shape: ShapeArg,
        #[arg(long)]
        out: String,
    },
    /// Feed points one at a time, as clicks on a canvas, and print the
    /// counter line after each append
    Replay {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum, default_value_t = AutoArg::Both)]
        auto: AutoArg,
        /// Press a run button after the last point
        #[arg(long, value_enum)]
        press: Option<ButtonArg>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AutoArg {
    None,
    Brute,
    Chain,
    Both,
}

impl From<AutoArg> for AutoMode {
    fn from(a: AutoArg) -> Self {
        match a {
            AutoArg::None => AutoMode::None,
            AutoArg::Brute => AutoMode::BruteForceOnly,
            AutoArg::Chain => AutoMode::MonotoneChainOnly,
            AutoArg::Both => AutoMode::Both,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ButtonArg {
    Brute,
    Chain,
}

impl From<ButtonArg> for Algorithm {
    fn from(b: ButtonArg) -> Self {
        match b {
            ButtonArg::Brute => Algorithm::BruteForce,
            ButtonArg::Chain => Algorithm::MonotoneChain,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlgoArg {
    Brute,
    Chain,
    Both,
}

impl AlgoArg {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgoArg::Brute => &[Algorithm::BruteForce],
            AlgoArg::Chain => &[Algorithm::MonotoneChain],
            AlgoArg::Both => &Algorithm::ALL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TraceArg {
    First,
    Farthest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Square,
    Disk,
    Collinear,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run {
            algo,
            input,
            out,
            trace,
            snapshot,
        } => run(algo, input, out, trace, snapshot),
        Action::Random {
            n,
            seed,
            index,
            half_width,
            shape,
            out,
        } => random(n, seed, index, half_width, shape, out),
        Action::Replay { input, auto, press } => replay(input, auto, press),
        Action::Report => report(),
    }
}

fn run(algo: AlgoArg, input: String, out: String, trace: TraceArg, snapshot: bool) -> Result<()> {
    tracing::info!(?algo, input, out, ?trace, snapshot, "run");
    let points = points_io::load_points(&input)?;
    tracing::info!(points = points.len(), "input_points");

    let mut session = Session::with_points(SessionCfg::default(), points);
    session.set_sort_policy(if snapshot {
        SortPolicy::Snapshot
    } else {
        SortPolicy::InPlace
    });
    session.set_trace(TraceCfg {
        rule: match trace {
            TraceArg::First => TraceRule::FirstMatch,
            TraceArg::Farthest => TraceRule::Farthest,
        },
    });
    let report = compute_report(session, algo);
    for r in &report.results {
        tracing::info!(
            algorithm = r.algorithm,
            hull = r.hull.len(),
            counter = ?r.counter,
            "result"
        );
    }

    points_io::write_json(&out, &report)?;
    let params = json!({
        "algo": format!("{algo:?}"),
        "input": input,
        "trace": format!("{trace:?}"),
        "snapshot": snapshot,
    });
    Sidecar::for_run(params, &report).write_next_to(Path::new(&out))?;
    Ok(())
}

/// Run the selected builders in order, capturing each result before the next
/// run replaces it.
fn compute_report(mut session: Session, algo: AlgoArg) -> RunReport {
    let input = session.points().to_vec();
    let results = algo
        .algorithms()
        .iter()
        .map(|&a| {
            session.run(a);
            AlgoReport::capture(&session, a)
        })
        .collect();
    RunReport::new(&input, session.points(), results)
}

fn random(
    n: usize,
    seed: u64,
    index: u64,
    half_width: i32,
    shape: ShapeArg,
    out: String,
) -> Result<()> {
    tracing::info!(n, seed, index, half_width, ?shape, out, "random");
    let cfg = CloudCfg {
        count: PointCount::Fixed(n),
        half_width,
        shape: match shape {
            ShapeArg::Square => CloudShape::Square,
            ShapeArg::Disk => CloudShape::Disk,
            ShapeArg::Collinear => CloudShape::Collinear,
        },
    };
    let points = draw_cloud(cfg, CloudReplay { seed, index })?;
    points_io::write_json(&out, &points_io::to_pairs(&points))?;
    let params = json!({
        "seed": seed,
        "index": index,
        "half_width": half_width,
        "shape": format!("{shape:?}"),
    });
    Sidecar::new("random", params, points.len()).write_next_to(Path::new(&out))?;
    Ok(())
}

fn replay(input: String, auto: AutoArg, press: Option<ButtonArg>) -> Result<()> {
    tracing::info!(input, ?auto, ?press, "replay");
    let points = points_io::load_points(&input)?;
    for line in replay_lines(points, auto.into(), press.map(Algorithm::from)) {
        println!("{line}");
    }
    Ok(())
}

/// Append `points` one by one under `auto`, then optionally press a run
/// button; one status line per step.
fn replay_lines(points: Vec<Point>, auto: AutoMode, press: Option<Algorithm>) -> Vec<String> {
    let mut session = Session::default();
    session.set_auto(auto);
    let mut lines = Vec::with_capacity(points.len() + 1);
    for p in points {
        session.append_point(p);
        lines.push(format!(
            "points: {:3}  {}",
            session.point_count(),
            session.status_line()
        ));
    }
    if let Some(algo) = press {
        let result = session.press(algo);
        lines.push(format!(
            "press {}: hull {}  {}",
            algo.name(),
            result.hull.len(),
            session.status_line()
        ));
    }
    lines
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "version": hullcmp::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
