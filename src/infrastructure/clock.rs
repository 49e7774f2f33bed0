//! Clock adapters

use chrono::{Local, NaiveDate};

use crate::application::ports::Clock;

/// Clock reading the system time in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock stuck on a given date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Clock chosen at startup: fixed when a date was injected, local otherwise
#[derive(Debug, Clone, Copy)]
pub enum SystemClock {
    Local(LocalClock),
    Fixed(FixedClock),
}

impl SystemClock {
    pub fn from_override(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => Self::Fixed(FixedClock::new(date)),
            None => Self::Local(LocalClock),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self {
            Self::Local(clock) => clock.today(),
            Self::Fixed(clock) => clock.today(),
        }
    }
}
