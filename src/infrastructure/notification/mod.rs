//! Notification infrastructure module
//!
//! Sends the announcement through `notify-send` (default) or through
//! notify-rust, with Lola's portrait as icon.

mod icon;
mod notify_rust;
mod notify_send;

use std::path::PathBuf;

use tracing::warn;

pub use icon::{default_icon_dir, ensure_icon, icon_bytes, ICON_FILE_NAME};
pub use notify_rust::NotifyRustNotifier;
pub use notify_send::{NotifySendNotifier, NOTIFY_SEND};

use crate::application::ports::Notifier;
use crate::domain::config::{AppConfig, NotifierKind, Urgency, DEFAULT_APP_NAME};

/// Presentation settings shared by all notifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub app_name: String,
    pub urgency: Urgency,
    pub icon: Option<PathBuf>,
}

impl NotificationSettings {
    /// Settings from the merged config, with an already resolved icon
    pub fn from_config(config: &AppConfig, icon: Option<PathBuf>) -> Self {
        Self {
            app_name: config.app_name_or_default().to_string(),
            urgency: config.urgency_or_default(),
            icon,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            urgency: Urgency::default(),
            icon: None,
        }
    }
}

/// Icon to show: the configured one, else the embedded portrait.
///
/// Failing to write the portrait is not fatal; the notification is then
/// sent without an icon.
pub async fn resolve_icon(configured: Option<PathBuf>) -> Option<PathBuf> {
    if configured.is_some() {
        return configured;
    }

    let dir = default_icon_dir();
    match ensure_icon(&dir).await {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "could not write notification icon");
            None
        }
    }
}

/// Create the notifier selected in the config
pub fn create_notifier(kind: NotifierKind, settings: NotificationSettings) -> Box<dyn Notifier> {
    match kind {
        NotifierKind::NotifySend => Box::new(NotifySendNotifier::new(settings)),
        NotifierKind::NotifyRust => Box::new(NotifyRustNotifier::new(settings)),
    }
}
