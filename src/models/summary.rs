use crate::utils::formatting::serialize_total;
use serde::Serialize;

/// Header of `summary.csv`, in output order.
pub const SUMMARY_HEADERS: [&str; 4] = ["driverId", "name", "total_hours", "total_miles"];

/// Aggregated totals for one driverId.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub name: Option<String>,
    #[serde(serialize_with = "serialize_total")]
    pub total_hours: f64,
    #[serde(serialize_with = "serialize_total")]
    pub total_miles: f64,
}

impl SummaryRow {
    pub fn new(driver_id: impl Into<String>, total_hours: f64, total_miles: f64) -> Self {
        Self {
            driver_id: driver_id.into(),
            name: None,
            total_hours,
            total_miles,
        }
    }

    /// Label used on the chart: the driver's name, or the id when the
    /// roster has no entry for it.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.driver_id)
    }
}
