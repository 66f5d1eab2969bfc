//! The end-to-end run: load, aggregate, join, write the summary, chart the
//! top drivers.

use crate::core::aggregate::{aggregate, attach_names, top_by_miles};
use crate::core::loader::{load_drivers, load_timesheet};
use crate::errors::AppResult;
use crate::export::{ensure_dir, render_top_chart, write_summary};
use crate::models::SummaryRow;
use crate::utils::path::in_dir;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DRIVERS_FILE: &str = "drivers.csv";
pub const TIMESHEET_FILE: &str = "timesheet.csv";
pub const SUMMARY_FILE: &str = "summary.csv";
pub const CHART_FILE: &str = "top10_drivers.png";

/// Number of drivers shown on the chart.
pub const TOP_N: usize = 10;

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary_path: PathBuf,
    pub chart_path: PathBuf,
    /// Roster lines read from the drivers table.
    pub drivers: usize,
    /// Timesheet lines read.
    pub entries: usize,
    /// Rows written to the summary (distinct driverIds).
    pub rows: usize,
    /// Bars drawn on the chart.
    pub charted: usize,
}

/// Loads both tables from `input_dir` and returns the joined summary rows
/// in first-appearance order. Writes nothing.
pub fn build_summary(input_dir: &Path) -> AppResult<Vec<SummaryRow>> {
    Ok(load_and_summarise(input_dir)?.rows)
}

struct Loaded {
    rows: Vec<SummaryRow>,
    drivers: usize,
    entries: usize,
}

fn load_and_summarise(input_dir: &Path) -> AppResult<Loaded> {
    let drivers = load_drivers(&in_dir(input_dir, DRIVERS_FILE))?;
    let entries = load_timesheet(&in_dir(input_dir, TIMESHEET_FILE))?;

    let mut rows = aggregate(&entries);
    attach_names(&mut rows, &drivers);

    debug!(
        drivers = drivers.len(),
        entries = entries.len(),
        rows = rows.len(),
        "summary built"
    );

    Ok(Loaded {
        rows,
        drivers: drivers.len(),
        entries: entries.len(),
    })
}

/// Reads `drivers.csv` and `timesheet.csv` from `input_dir`, writes
/// `summary.csv` into `output_dir` and `top10_drivers.png` into
/// `plots_dir`. Missing output directories are created; existing files
/// are overwritten.
///
/// The summary is always written before the chart is rendered, so a
/// chart failure never loses the CSV.
pub fn generate_outputs(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    plots_dir: impl AsRef<Path>,
) -> AppResult<RunReport> {
    let (input_dir, output_dir, plots_dir) =
        (input_dir.as_ref(), output_dir.as_ref(), plots_dir.as_ref());

    ensure_dir(output_dir)?;
    ensure_dir(plots_dir)?;

    let loaded = load_and_summarise(input_dir)?;

    let summary_path = in_dir(output_dir, SUMMARY_FILE);
    write_summary(&loaded.rows, &summary_path)?;

    let top = top_by_miles(&loaded.rows, TOP_N);
    let chart_path = in_dir(plots_dir, CHART_FILE);
    render_top_chart(&top, &chart_path)?;

    Ok(RunReport {
        summary_path,
        chart_path,
        drivers: loaded.drivers,
        entries: loaded.entries,
        rows: loaded.rows.len(),
        charted: top.len(),
    })
}
