pub mod driver;
pub mod summary;
pub mod timesheet;

pub use driver::{Driver, DriverRecord};
pub use summary::SummaryRow;
pub use timesheet::{TimesheetEntry, TimesheetRecord};
