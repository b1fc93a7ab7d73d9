//! Random integer point clouds (uniform square, disk, collinear) with replay tokens.
//!
//! Purpose
//! - Deterministic inputs for tests, benches, and the CLI. The same
//!   `(cfg, token)` always yields the same cloud, so counter comparisons
//!   between the two builders can be replayed.
//!
//! Model
//! - Draw the point count from `PointCount`, then sample coordinates in
//!   `[-half_width, half_width]` according to `CloudShape`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Point;

/// Error type for cloud parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid cloud params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Point count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn validate(&self) -> Result<(), GeneratorError> {
        match *self {
            PointCount::Uniform { min, max } if min > max => Err(GeneratorError::invalid(
                format!("count range min={min} exceeds max={max}"),
            )),
            _ => Ok(()),
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max),
        }
    }
}

/// Spatial distribution of the cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    /// Uniform in the axis-aligned square `[-w, w]²`.
    Square,
    /// Uniform in the disk of radius `w` (rejection sampled).
    Disk,
    /// All points on one random line through the origin.
    Collinear,
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Coordinates stay within `[-half_width, half_width]`. Must be positive.
    pub half_width: i32,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(32),
            half_width: 1000,
            shape: CloudShape::Square,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point cloud.
///
/// Duplicates are possible (and intended: the builders must cope with them).
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, GeneratorError> {
    if cfg.half_width <= 0 {
        return Err(GeneratorError::invalid(format!(
            "half_width must be positive, got {}",
            cfg.half_width
        )));
    }
    cfg.count.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let w = cfg.half_width;
    let pts = match cfg.shape {
        CloudShape::Square => (0..n)
            .map(|_| Vector2::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w)))
            .collect(),
        CloudShape::Disk => {
            let r2 = (w as i64) * (w as i64);
            let mut out = Vec::with_capacity(n);
            while out.len() < n {
                let p = Vector2::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w));
                let d2 = (p.x as i64) * (p.x as i64) + (p.y as i64) * (p.y as i64);
                if d2 <= r2 {
                    out.push(p);
                }
            }
            out
        }
        CloudShape::Collinear => {
            let (dx, dy): (i32, i32) = loop {
                let d = (rng.gen_range(-3..=3), rng.gen_range(-3..=3));
                if d != (0, 0) {
                    break d;
                }
            };
            let reach = w / dx.abs().max(dy.abs());
            (0..n)
                .map(|_| {
                    let t = rng.gen_range(-reach..=reach);
                    Vector2::new(t * dx, t * dy)
                })
                .collect()
        }
    };
    Ok(pts)
}
