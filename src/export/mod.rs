// src/export/mod.rs

mod chart;
mod fs_utils;
mod summary_csv;

pub use chart::{CHART_TITLE, X_AXIS_LABEL, render_top_chart};
pub use fs_utils::ensure_dir;
pub use summary_csv::{summary_to_string, write_summary};
