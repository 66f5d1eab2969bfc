use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::top_by_miles;
use crate::core::pipeline::{TOP_N, build_summary};
use crate::errors::AppResult;
use crate::models::SummaryRow;
use crate::ui::messages::{header, warning};
use crate::utils::format_total;
use crate::utils::table::{Align, Column, Table};

/// Handle the `show` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { top } = cmd {
        let rows = build_summary(&cfg.input_path())?;

        if rows.is_empty() {
            warning("The timesheet has no entries.");
            return Ok(());
        }

        let selected: Vec<&SummaryRow> = if *top {
            header(format!("Top {} drivers by total miles", TOP_N));
            top_by_miles(&rows, TOP_N)
        } else {
            header("Driver summary");
            rows.iter().collect()
        };

        print!("{}", render(&selected));
    }
    Ok(())
}

fn render(rows: &[&SummaryRow]) -> String {
    let mut table = Table::new(vec![
        Column::new("driverId", Align::Left),
        Column::new("name", Align::Left),
        Column::new("total_hours", Align::Right),
        Column::new("total_miles", Align::Right),
    ]);

    for row in rows {
        table.add_row(vec![
            row.driver_id.clone(),
            row.name.clone().unwrap_or_default(),
            format_total(row.total_hours),
            format_total(row.total_miles),
        ]);
    }

    table.render()
}
