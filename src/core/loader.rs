//! Loading of the two input tables.
//!
//! Both tables are read with a header row. Required columns are checked
//! before any data row is touched, and numeric cells are validated instead
//! of being coerced, so bad input stops the run with the offending cell.

use crate::errors::{AppError, AppResult};
use crate::models::driver::{DRIVER_ID_COLUMN, NAME_COLUMN};
use crate::models::timesheet::{HOURS_COLUMN, MILES_COLUMN};
use crate::models::{Driver, DriverRecord, TimesheetEntry, TimesheetRecord};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Reads `drivers.csv`. Extra columns are ignored.
pub fn load_drivers(path: &Path) -> AppResult<Vec<Driver>> {
    let rows: Vec<(u64, DriverRecord)> = read_table(path, &[DRIVER_ID_COLUMN, NAME_COLUMN])?;

    let mut drivers = Vec::with_capacity(rows.len());
    for (line, rec) in rows {
        require_id(path, line, &rec.driver_id)?;
        drivers.push(Driver::from(rec));
    }

    debug!(path = %path.display(), drivers = drivers.len(), "loaded driver roster");
    Ok(drivers)
}

/// Reads `timesheet.csv`, validating hours and miles on every line.
pub fn load_timesheet(path: &Path) -> AppResult<Vec<TimesheetEntry>> {
    let rows: Vec<(u64, TimesheetRecord)> =
        read_table(path, &[DRIVER_ID_COLUMN, HOURS_COLUMN, MILES_COLUMN])?;

    let mut entries = Vec::with_capacity(rows.len());
    for (line, rec) in rows {
        require_id(path, line, &rec.driver_id)?;
        entries.push(TimesheetEntry {
            hours_logged: parse_number(path, line, HOURS_COLUMN, &rec.hours_logged)?,
            miles_logged: parse_number(path, line, MILES_COLUMN, &rec.miles_logged)?,
            driver_id: rec.driver_id,
        });
    }

    debug!(path = %path.display(), entries = entries.len(), "loaded timesheet");
    Ok(entries)
}

/// Opens a table, checks its header and deserializes every record.
/// Each record comes back with its 1-based line number (header = line 1).
fn read_table<T: DeserializeOwned>(path: &Path, required: &[&str]) -> AppResult<Vec<(u64, T)>> {
    let mut rdr = open_reader(path)?;

    let headers = rdr
        .headers()
        .map_err(|e| AppError::csv(path, e))?
        .clone();
    check_columns(path, &headers, required)?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| AppError::csv(path, e))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|e| AppError::csv(path, e))?;
        rows.push((line, row));
    }

    Ok(rows)
}

fn open_reader(path: &Path) -> AppResult<Reader<File>> {
    let file = File::open(path).map_err(|e| AppError::file_access(path, e))?;
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file))
}

/// Fails on the first required column that is missing from the header.
fn check_columns(path: &Path, headers: &StringRecord, required: &[&str]) -> AppResult<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(AppError::Schema {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn require_id(path: &Path, line: u64, driver_id: &str) -> AppResult<()> {
    if driver_id.is_empty() {
        return Err(AppError::DataValidation {
            path: path.to_path_buf(),
            line,
            column: DRIVER_ID_COLUMN.to_string(),
            value: String::new(),
        });
    }
    Ok(())
}

/// Parses a numeric cell. Empty, non-numeric and non-finite values are
/// rejected rather than read as zero.
fn parse_number(path: &Path, line: u64, column: &str, raw: &str) -> AppResult<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::DataValidation {
            path: path.to_path_buf(),
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}
