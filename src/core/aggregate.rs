//! Group-by, left join and top-N selection over in-memory rows.

use crate::models::{Driver, SummaryRow, TimesheetEntry};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::warn;

/// Sums hours and miles per driverId.
///
/// Rows come out in first-appearance order of each driverId in the
/// timesheet, one row per distinct id.
pub fn aggregate(entries: &[TimesheetEntry]) -> Vec<SummaryRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<SummaryRow> = Vec::new();

    for entry in entries {
        match index.entry(entry.driver_id.as_str()) {
            Entry::Occupied(slot) => {
                let row = &mut rows[*slot.get()];
                row.total_hours += entry.hours_logged;
                row.total_miles += entry.miles_logged;
            }
            Entry::Vacant(slot) => {
                slot.insert(rows.len());
                rows.push(SummaryRow::new(
                    entry.driver_id.clone(),
                    entry.hours_logged,
                    entry.miles_logged,
                ));
            }
        }
    }

    rows
}

/// Builds the driverId -> name lookup. The first roster line for an id
/// wins; later duplicates are reported and skipped.
pub fn roster_index(drivers: &[Driver]) -> HashMap<&str, Option<&str>> {
    let mut names = HashMap::with_capacity(drivers.len());
    for driver in drivers {
        match names.entry(driver.driver_id.as_str()) {
            Entry::Occupied(_) => {
                warn!(driver_id = %driver.driver_id, "duplicate driverId in roster, keeping first entry");
            }
            Entry::Vacant(slot) => {
                slot.insert(driver.name.as_deref());
            }
        }
    }
    names
}

/// Left join: every row is kept, `name` stays `None` when the roster has
/// no (or an unnamed) entry for the id.
pub fn attach_names(rows: &mut [SummaryRow], drivers: &[Driver]) {
    let names = roster_index(drivers);
    for row in rows.iter_mut() {
        row.name = names
            .get(row.driver_id.as_str())
            .copied()
            .flatten()
            .map(str::to_string);
    }
}

/// The `n` rows with the largest `total_miles`, largest first.
/// Equal totals keep their summary order. `rows` is left untouched.
pub fn top_by_miles(rows: &[SummaryRow], n: usize) -> Vec<&SummaryRow> {
    let mut ranked: Vec<&SummaryRow> = rows.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.total_miles.total_cmp(&a.total_miles));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, hours: f64, miles: f64) -> TimesheetEntry {
        TimesheetEntry {
            driver_id: id.to_string(),
            hours_logged: hours,
            miles_logged: miles,
        }
    }

    fn driver(id: &str, name: &str) -> Driver {
        Driver {
            driver_id: id.to_string(),
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn sums_per_driver_in_first_appearance_order() {
        let entries = vec![
            entry("2", 8.0, 200.0),
            entry("1", 5.0, 100.0),
            entry("2", 1.5, 20.0),
            entry("1", 3.0, 50.0),
        ];
        let rows = aggregate(&entries);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].driver_id, "2");
        assert_eq!(rows[0].total_hours, 9.5);
        assert_eq!(rows[0].total_miles, 220.0);
        assert_eq!(rows[1].driver_id, "1");
        assert_eq!(rows[1].total_hours, 8.0);
        assert_eq!(rows[1].total_miles, 150.0);
    }

    #[test]
    fn empty_timesheet_gives_empty_summary() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn left_join_keeps_unknown_drivers() {
        let mut rows = aggregate(&[entry("1", 1.0, 1.0), entry("3", 2.0, 2.0)]);
        attach_names(&mut rows, &[driver("1", "Alice"), driver("2", "Bob")]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name.as_deref(), Some("Alice"));
        assert_eq!(rows[1].driver_id, "3");
        assert_eq!(rows[1].name, None);
    }

    #[test]
    fn duplicate_roster_ids_keep_first_name() {
        let mut rows = aggregate(&[entry("1", 1.0, 1.0)]);
        attach_names(&mut rows, &[driver("1", "Alice"), driver("1", "Alicia")]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("Alice"));
    }

    #[test]
    fn top_selection_is_descending_and_stable() {
        let rows = vec![
            SummaryRow::new("a", 0.0, 10.0),
            SummaryRow::new("b", 0.0, 30.0),
            SummaryRow::new("c", 0.0, 10.0),
            SummaryRow::new("d", 0.0, 20.0),
        ];
        let top = top_by_miles(&rows, 3);
        let ids: Vec<&str> = top.iter().map(|r| r.driver_id.as_str()).collect();

        assert_eq!(ids, ["b", "d", "a"]);
        // summary order untouched
        assert_eq!(rows[0].driver_id, "a");
    }

    #[test]
    fn top_selection_caps_at_n() {
        let rows: Vec<SummaryRow> = (0..15)
            .map(|i| SummaryRow::new(i.to_string(), 1.0, i as f64))
            .collect();
        let top = top_by_miles(&rows, 10);

        assert_eq!(top.len(), 10);
        assert_eq!(top[0].total_miles, 14.0);
        let cutoff = top[9].total_miles;
        assert!(rows
            .iter()
            .filter(|r| !top.iter().any(|t| t.driver_id == r.driver_id))
            .all(|r| r.total_miles <= cutoff));
    }

    #[test]
    fn fewer_rows_than_n_are_all_selected() {
        let rows = vec![SummaryRow::new("x", 1.0, 5.0)];
        assert_eq!(top_by_miles(&rows, 10).len(), 1);
        assert!(top_by_miles(&[], 10).is_empty());
    }
}
