//! Calendar table lookup

use std::collections::HashMap;

use chrono::NaiveDate;

use super::entry::{CalendarEntry, Genre, HallowedObject, MonthDay};
use super::table_data::ENTRIES;

/// Object celebrated on a day the table has no entry for
pub const FALLBACK_OBJECT: HallowedObject = HallowedObject::new("objet", "objets", Genre::Male);

/// Immutable month/day to hallowed object table
#[derive(Debug, Clone)]
pub struct CalendarTable {
    entries: HashMap<MonthDay, HallowedObject>,
}

impl CalendarTable {
    /// Table compiled into the binary, covering every day of a leap year
    pub fn builtin() -> Self {
        Self::from_entries(ENTRIES.iter().copied())
    }

    /// Build a table from explicit entries.
    ///
    /// A month/day maps to at most one object: when a key repeats, the
    /// first entry wins.
    pub fn from_entries(entries: impl IntoIterator<Item = CalendarEntry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            map.entry(entry.month_day).or_insert(entry.object);
        }
        Self { entries: map }
    }

    /// Object registered for the given key, if any
    pub fn lookup(&self, month_day: MonthDay) -> Option<&HallowedObject> {
        self.entries.get(&month_day)
    }

    /// Object celebrated on the given date, or [`FALLBACK_OBJECT`]
    pub fn resolve(&self, date: NaiveDate) -> &HallowedObject {
        self.lookup(MonthDay::of(date)).unwrap_or(&FALLBACK_OBJECT)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CalendarTable {
    fn default() -> Self {
        Self::builtin()
    }
}
