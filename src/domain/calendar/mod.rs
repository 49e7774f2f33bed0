//! Calendar of hallowed objects

pub mod entry;
pub mod table;
mod table_data;
pub mod weekday;

pub use entry::{CalendarEntry, Genre, HallowedObject, MonthDay};
pub use table::{CalendarTable, FALLBACK_OBJECT};
pub use weekday::{weekday_name, WEEKDAY_NAMES};
