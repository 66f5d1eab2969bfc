use serde::Deserialize;

/// Column names expected in `drivers.csv`.
pub const DRIVER_ID_COLUMN: &str = "driverId";
pub const NAME_COLUMN: &str = "name";

/// One raw roster line, exactly as it appears in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverRecord {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub name: String,
}

/// A roster entry: the display name for a driverId.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub driver_id: String,
    /// `None` when the roster cell is empty.
    pub name: Option<String>,
}

impl From<DriverRecord> for Driver {
    fn from(rec: DriverRecord) -> Self {
        let name = if rec.name.is_empty() {
            None
        } else {
            Some(rec.name)
        };
        Driver {
            driver_id: rec.driver_id,
            name,
        }
    }
}
