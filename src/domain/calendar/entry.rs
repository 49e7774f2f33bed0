//! Calendar entry value objects

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Grammatical genre of a hallowed object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Male,
    Female,
    Neutral,
}

impl Genre {
    /// Title in front of the object: "Saint" or "Sainte"
    pub const fn saint_prefix(&self) -> &'static str {
        match self {
            Self::Female => "Sainte",
            Self::Male | Self::Neutral => "Saint",
        }
    }

    /// Quantifier used when wishing all of them a happy day
    pub const fn all(&self) -> &'static str {
        match self {
            Self::Female => "toutes",
            Self::Male | Self::Neutral => "tous",
        }
    }
}

/// The object celebrated on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallowedObject {
    pub singular: &'static str,
    pub plural: &'static str,
    pub genre: Genre,
}

impl HallowedObject {
    pub const fn new(singular: &'static str, plural: &'static str, genre: Genre) -> Self {
        Self {
            singular,
            plural,
            genre,
        }
    }

    /// Label of the day, e.g. "Saint-symptôme"
    pub fn label(&self) -> String {
        format!("{}-{}", self.genre.saint_prefix(), self.singular)
    }
}

/// Month and day key, year agnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Build a key from a month (1-12) and a day of month (1-31).
    ///
    /// Values are not checked; a key that matches no real date simply
    /// never gets looked up.
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Key of the given date
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// One row of the calendar table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEntry {
    pub month_day: MonthDay,
    pub object: HallowedObject,
}

impl CalendarEntry {
    pub const fn new(
        month_day: MonthDay,
        singular: &'static str,
        plural: &'static str,
        genre: Genre,
    ) -> Self {
        Self {
            month_day,
            object: HallowedObject::new(singular, plural, genre),
        }
    }
}
