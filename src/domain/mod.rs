//! Domain layer - Core business logic
//!
//! Contains the calendar of hallowed objects, the announcement message,
//! configuration value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod announcement;
pub mod calendar;
pub mod config;
pub mod error;

// Re-export common types
pub use announcement::AnnouncementMessage;
pub use calendar::{CalendarEntry, CalendarTable, Genre, HallowedObject, MonthDay};
pub use config::{AppConfig, NotifierKind, Urgency};
pub use error::*;
