// src/export/chart.rs

use crate::core::pipeline::TOP_N;
use crate::errors::{AppError, AppResult};
use crate::models::SummaryRow;
use plotters::prelude::*;
use plotters::style::register_font;
use std::fmt::Display;
use std::path::Path;
use tracing::debug;

pub const CHART_TITLE: &str = "Top 10 drivers by total miles";
pub const X_AXIS_LABEL: &str = "Total miles";

const CHART_SIZE: (u32, u32) = (1000, 600);
const BAR_COLOR: RGBColor = RGBColor(0x4C, 0x72, 0xB0);
const FONT_FAMILY: &str = "sans-serif";

// Embedded so rendering does not depend on the fonts installed on the host.
static FONT: &[u8] = include_bytes!("../../res/DejaVuSans.ttf");

fn chart_error<E: Display>(err: E) -> AppError {
    AppError::Chart(err.to_string())
}

/// Renders `rows` (already ranked, largest first) as a horizontal bar chart
/// PNG. The first row is drawn at the top. An empty slice still produces a
/// chart with axes and title.
pub fn render_top_chart(rows: &[&SummaryRow], path: &Path) -> AppResult<()> {
    // InvalidFont carries no message to format
    register_font(FONT_FAMILY, FontStyle::Normal, FONT)
        .map_err(|_| AppError::Chart("embedded font could not be loaded".into()))?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    // One fixed slot per rank; slot TOP_N - 1 is the top of the y axis.
    let top_slot = TOP_N as i32 - 1;
    let (x_min, x_max) = x_bounds(rows);

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, (FONT_FAMILY, 26))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(170)
        .build_cartesian_2d(x_min..x_max, (0..top_slot).into_segmented())
        .map_err(chart_error)?;

    let labels: Vec<&str> = rows.iter().map(|r| r.label()).collect();
    let label_for = |value: &SegmentValue<i32>| slot_label(&labels, top_slot, value);

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(TOP_N)
        .y_label_formatter(&label_for)
        .x_desc(X_AXIS_LABEL)
        .label_style((FONT_FAMILY, 14))
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(
            Histogram::horizontal(&chart)
                .style(BAR_COLOR.filled())
                .margin(6)
                .data(
                    rows.iter()
                        .enumerate()
                        .map(|(rank, row)| (top_slot - rank as i32, row.total_miles)),
                ),
        )
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;

    debug!(path = %path.display(), bars = rows.len(), "chart rendered");
    Ok(())
}

/// Label for a y-axis slot: rank 0 sits in `top_slot`, slots without a
/// ranked row stay blank.
fn slot_label(labels: &[&str], top_slot: i32, value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::Exact(slot) | SegmentValue::CenterOf(slot) => {
            usize::try_from(top_slot - *slot)
                .ok()
                .and_then(|rank| labels.get(rank))
                .map(|s| s.to_string())
                .unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

/// x range: from zero (or the most negative total) to a little past the
/// largest total, never degenerate.
fn x_bounds(rows: &[&SummaryRow]) -> (f64, f64) {
    let max = rows.iter().map(|r| r.total_miles).fold(0.0, f64::max);
    let min = rows.iter().map(|r| r.total_miles).fold(0.0, f64::min);
    let upper = if max > 0.0 { max * 1.05 } else { 1.0 };
    (min * 1.05, upper)
}
