use std::{fs, path::Path};

use anyhow::Context;
use rodheat_core::{Grid, SimulationParameters};
use rodheat_solvers::transient::ftcs::{Snapshot, Solution};
use serde::Serialize;

/// Returns the indices shown in a report for a history of `len` fields:
/// the first, a quarter, half, and the last.
///
/// Duplicates are removed for very short histories.
#[must_use]
pub fn report_steps(len: usize) -> Vec<usize> {
    let mut steps = vec![0, len / 4, len / 2, len.saturating_sub(1)];
    steps.dedup();
    steps
}

/// Returns the latest recorded snapshot at or before `step`.
#[must_use]
pub fn snapshot_at(solution: &Solution, step: usize) -> Option<&Snapshot> {
    solution
        .snapshots
        .iter()
        .take_while(|snapshot| snapshot.step <= step)
        .last()
}

/// Formats the chosen profiles as a position-by-time table.
#[must_use]
pub fn profile_table(positions: &[f64], snapshots: &[&Snapshot]) -> String {
    let mut out = format!("{:>10}", "x (m)");
    for snapshot in snapshots {
        out.push_str(&format!("{:>14}", format!("t={:.2}s", snapshot.time)));
    }
    out.push('\n');

    for (i, x) in positions.iter().enumerate() {
        out.push_str(&format!("{x:>10.4}"));
        for snapshot in snapshots {
            out.push_str(&format!("{:>14.4}", snapshot.temperature[i]));
        }
        out.push('\n');
    }

    out
}

/// Everything written by a JSON export.
#[derive(Debug, Serialize)]
pub struct Export<'a> {
    pub positions: Vec<f64>,
    pub parameters: &'a SimulationParameters,
    pub stability_ratio: f64,
    pub solution: &'a Solution,
}

impl<'a> Export<'a> {
    #[must_use]
    pub fn new(grid: &Grid, parameters: &'a SimulationParameters, solution: &'a Solution) -> Self {
        Self {
            positions: grid.positions(),
            parameters,
            stability_ratio: parameters.stability_ratio(grid.spacing()),
            solution,
        }
    }

    /// Writes the export as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize snapshots")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }
}
