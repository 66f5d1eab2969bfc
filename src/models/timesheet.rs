use serde::Deserialize;

/// Column names expected in `timesheet.csv`.
pub const HOURS_COLUMN: &str = "hours-logged";
pub const MILES_COLUMN: &str = "miles-logged";

/// One raw timesheet line. Numbers stay as text until validated so that a
/// bad cell can be reported with its column and value.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesheetRecord {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "hours-logged")]
    pub hours_logged: String,
    #[serde(rename = "miles-logged")]
    pub miles_logged: String,
}

/// A validated timesheet entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetEntry {
    pub driver_id: String,
    pub hours_logged: f64,
    pub miles_logged: f64,
}
