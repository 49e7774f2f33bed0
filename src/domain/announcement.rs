//! Announcement message value object

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::domain::calendar::{weekday_name, HallowedObject};

/// Two-line announcement of the day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementMessage {
    greeting: String,
    celebration: String,
}

impl AnnouncementMessage {
    /// Compose the announcement for the object celebrated on `date`
    pub fn compose(date: NaiveDate, object: &HallowedObject) -> Self {
        let greeting = format!(
            "Chalut ! Aujourd'hui, {} {}, c'est la {}.",
            weekday_name(date.weekday()),
            date.day(),
            object.label(),
        );
        let celebration = format!(
            "Bonne fête à {} les {} 🎆",
            object.genre.all(),
            object.plural,
        );

        Self {
            greeting,
            celebration,
        }
    }

    /// First line: "Chalut ! Aujourd'hui, ..."
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Second line: "Bonne fête à ..."
    pub fn celebration(&self) -> &str {
        &self.celebration
    }

    /// Notification summary
    pub fn title(&self) -> &str {
        &self.celebration
    }

    /// Notification body
    pub fn body(&self) -> &str {
        &self.greeting
    }
}

impl fmt::Display for AnnouncementMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.greeting, self.celebration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::Genre;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn masculine_announcement() {
        let object = HallowedObject::new("symptôme", "symptômes", Genre::Male);
        let message = AnnouncementMessage::compose(date(2025, 11, 2), &object);

        assert_eq!(
            message.to_string(),
            "Chalut ! Aujourd'hui, Mitanche 2, c'est la Saint-symptôme.\n\
             Bonne fête à tous les symptômes 🎆"
        );
    }

    #[test]
    fn feminine_announcement() {
        let object = HallowedObject::new("gambette", "gambettes", Genre::Female);
        // 2025-01-13 is a Monday
        let message = AnnouncementMessage::compose(date(2025, 1, 13), &object);

        assert_eq!(
            message.greeting(),
            "Chalut ! Aujourd'hui, Lourdi 13, c'est la Sainte-gambette."
        );
        assert_eq!(message.celebration(), "Bonne fête à toutes les gambettes 🎆");
    }

    #[test]
    fn neutral_uses_masculine_forms() {
        let object = HallowedObject::new("tzatziki", "tzatzikis", Genre::Neutral);
        // 2025-08-07 is a Thursday
        let message = AnnouncementMessage::compose(date(2025, 8, 7), &object);

        assert_eq!(
            message.greeting(),
            "Chalut ! Aujourd'hui, Jourdi 7, c'est la Saint-tzatziki."
        );
        assert_eq!(message.celebration(), "Bonne fête à tous les tzatzikis 🎆");
    }

    #[test]
    fn title_is_celebration_and_body_is_greeting() {
        let object = HallowedObject::new("apex", "apexes", Genre::Male);
        let message = AnnouncementMessage::compose(date(2025, 1, 3), &object);

        assert_eq!(message.title(), message.celebration());
        assert_eq!(message.body(), message.greeting());
    }

    #[test]
    fn display_has_exactly_two_lines() {
        let object = HallowedObject::new("apex", "apexes", Genre::Male);
        let message = AnnouncementMessage::compose(date(2025, 1, 3), &object);

        assert_eq!(message.to_string().lines().count(), 2);
        assert!(!message.to_string().ends_with('\n'));
    }
}
