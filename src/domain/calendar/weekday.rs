//! Weekday names of the announcement calendar

use chrono::Weekday;

/// Weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Lourdi", "Pardi", "Morquidi", "Jourdi", "Dendrevi", "Sordi", "Mitanche",
];

/// Name of the given weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}
