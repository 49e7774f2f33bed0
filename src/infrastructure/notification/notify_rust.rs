//! Notification adapter using notify-rust
//!
//! Talks to the notification daemon directly instead of spawning a tool.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
#[cfg(all(unix, not(target_os = "macos")))]
use crate::domain::config::Urgency;

use super::NotificationSettings;

/// Notifier using notify-rust.
///
/// No external tool is involved, so a missing notification daemon is
/// reported as [`NotificationError::SendFailed`]. Only the notify-send
/// backend reports [`NotificationError::ToolMissing`].
pub struct NotifyRustNotifier {
    settings: NotificationSettings,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new(settings: NotificationSettings) -> Self {
        Self { settings }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new(NotificationSettings::default())
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn to_notify_urgency(urgency: Urgency) -> notify_rust::Urgency {
    match urgency {
        Urgency::Low => notify_rust::Urgency::Low,
        Urgency::Normal => notify_rust::Urgency::Normal,
        Urgency::Critical => notify_rust::Urgency::Critical,
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let body = body.to_owned();
        let settings = self.settings.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = notify_rust::Notification::new();
            notification
                .appname(&settings.app_name)
                .summary(&title)
                .body(&body);

            if let Some(ref icon) = settings.icon {
                notification.icon(&icon.to_string_lossy());
            }

            #[cfg(all(unix, not(target_os = "macos")))]
            notification.urgency(to_notify_urgency(settings.urgency));

            notification
                .show()
                .map_err(show_error)?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

/// Any failure to show a notification, a missing daemon included
fn show_error(err: impl std::fmt::Display) -> NotificationError {
    NotificationError::SendFailed(err.to_string())
}
