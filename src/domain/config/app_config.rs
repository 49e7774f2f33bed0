//! Application configuration value object

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::error::{InvalidDateError, InvalidSettingError};

/// Default application name shown by the notification daemon
pub const DEFAULT_APP_NAME: &str = "Annonce de Lola";

/// Notification urgency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Urgency {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for Urgency {
    type Err = InvalidSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "critical" => Ok(Self::Critical),
            _ => Err(InvalidSettingError {
                key: "urgency",
                input: s.to_string(),
                valid: "low, normal, critical",
            }),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierKind {
    /// The `notify-send` command line tool
    #[default]
    NotifySend,
    /// Direct D-Bus notifications through notify-rust
    NotifyRust,
}

impl NotifierKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotifySend => "notify-send",
            Self::NotifyRust => "notify-rust",
        }
    }
}

impl FromStr for NotifierKind {
    type Err = InvalidSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "notify-send" => Ok(Self::NotifySend),
            "notify-rust" => Ok(Self::NotifyRust),
            _ => Err(InvalidSettingError {
                key: "notifier",
                input: s.to_string(),
                valid: "notify-send, notify-rust",
            }),
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub urgency: Option<String>,
    pub icon: Option<PathBuf>,
    pub notifier: Option<String>,
    /// Date override, only ever set from the environment
    #[serde(skip)]
    pub date: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            urgency: Some(Urgency::default().to_string()),
            icon: None,
            notifier: Some(NotifierKind::default().to_string()),
            date: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            urgency: other.urgency.or(self.urgency),
            icon: other.icon.or(self.icon),
            notifier: other.notifier.or(self.notifier),
            date: other.date.or(self.date),
        }
    }

    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get urgency as parsed Urgency, or default if not set/invalid
    pub fn urgency_or_default(&self) -> Urgency {
        self.urgency
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get notifier as parsed NotifierKind, or default if not set/invalid
    pub fn notifier_or_default(&self) -> NotifierKind {
        self.notifier
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Parsed date override, if one is set
    pub fn date(&self) -> Result<Option<NaiveDate>, InvalidDateError> {
        self.date
            .as_deref()
            .map(|s| {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| InvalidDateError {
                    input: s.to_string(),
                })
            })
            .transpose()
    }
}
