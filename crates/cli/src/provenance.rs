//! Provenance sidecars: `<stem>.provenance.json` next to every CLI output.
//!
//! A sidecar records which build produced the file (version, commit), the
//! command and its parameters, and for hull runs a per-algorithm summary
//! (hull size and counter), so counter comparisons can be audited without
//! reopening the full report.

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::report::RunReport;

/// Per-algorithm line of a hull-run sidecar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoSummary {
    pub algorithm: String,
    pub hull_len: usize,
    pub counter: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sidecar {
    pub version: String,
    pub code_rev: String,
    pub command: String,
    /// `file:line` of the writer call.
    pub callsite: String,
    pub params: Value,
    pub point_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub algorithms: Vec<AlgoSummary>,
    pub output: String,
}

impl Sidecar {
    #[track_caller]
    pub fn new(command: &str, params: Value, point_count: usize) -> Self {
        let loc = Location::caller();
        Self {
            version: hullcmp::VERSION.to_string(),
            code_rev: code_rev(),
            command: command.to_string(),
            callsite: format!("{}:{}", loc.file(), loc.line()),
            params,
            point_count,
            algorithms: Vec::new(),
            output: String::new(),
        }
    }

    /// Sidecar for `hullcmp run`, summarizing every algorithm in `report`.
    #[track_caller]
    pub fn for_run(params: Value, report: &RunReport) -> Self {
        let mut sidecar = Self::new("run", params, report.points.len());
        sidecar.algorithms = report
            .results
            .iter()
            .map(|r| AlgoSummary {
                algorithm: r.algorithm.clone(),
                hull_len: r.hull.len(),
                counter: r.counter,
            })
            .collect();
        sidecar
    }

    /// Write next to `artifact`; returns the sidecar path.
    pub fn write_next_to(mut self, artifact: &Path) -> Result<PathBuf> {
        self.output = artifact.to_string_lossy().into_owned();
        let path = sidecar_path(artifact);
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), command = self.command, "provenance");
        Ok(path)
    }
}

/// `dir/hulls.json` → `dir/hulls.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit the binary was built from (`GIT_COMMIT` at build or run time), else
/// `"unknown"`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
