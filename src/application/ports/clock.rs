//! Clock port interface

use chrono::NaiveDate;

/// Port for reading the current date
pub trait Clock: Send + Sync {
    /// Today's date in the local time zone
    fn today(&self) -> NaiveDate;
}
