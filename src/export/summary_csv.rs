// src/export/summary_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::SummaryRow;
use csv::Writer;
use std::io;
use std::path::Path;
use tracing::debug;

/// Writes the summary table (header included thanks to serde), replacing
/// any previous file.
pub fn write_summary(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::csv(path, e))?;
    write_rows(&mut wtr, rows).map_err(|e| AppError::csv(path, e))?;
    wtr.flush().map_err(|e| AppError::file_access(path, e))?;

    debug!(path = %path.display(), rows = rows.len(), "summary written");
    Ok(())
}

/// Renders the summary exactly as `write_summary` would store it.
pub fn summary_to_string(rows: &[SummaryRow]) -> AppResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());
    write_rows(&mut wtr, rows).map_err(|e| AppError::Io(io::Error::from(e)))?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Io(io::Error::other(e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| AppError::Io(io::Error::other(e)))
}

fn write_rows<W: io::Write>(wtr: &mut Writer<W>, rows: &[SummaryRow]) -> csv::Result<()> {
    if rows.is_empty() {
        // serde only emits the header alongside the first record
        wtr.write_record(crate::models::summary::SUMMARY_HEADERS)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    Ok(())
}
