use crate::config::Config;
use crate::core::pipeline::generate_outputs;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `generate` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let input = cfg.input_path();
    info(format!("Reading input tables from {}", input.display()));

    let report = generate_outputs(&input, cfg.output_path(), cfg.plots_path())?;

    success(format!("Summary written: {}", report.summary_path.display()));
    if report.charted == 0 {
        warning("No timesheet rows: the chart has no bars.");
    }
    success(format!("Chart written: {}", report.chart_path.display()));

    info(format!(
        "{} timesheet entries, {} roster drivers -> {} summary rows, {} charted",
        report.entries, report.drivers, report.rows, report.charted
    ));
    Ok(())
}
