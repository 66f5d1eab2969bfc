//! Number formatting shared by the CSV writer and the terminal table.

use serde::Serializer;

/// Formats a total the way it is written to `summary.csv`.
///
/// Integral values print without a fractional part (`150`), everything
/// else in shortest round-trip form (`8.5`, `0.30000000000000004`).
pub fn format_total(value: f64) -> String {
    format!("{}", value)
}

/// serde hook for `f64` totals in `SummaryRow`.
pub fn serialize_total<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_total(*value))
}
