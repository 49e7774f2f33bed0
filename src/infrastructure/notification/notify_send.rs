//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::{NotificationError, Notifier};

use super::NotificationSettings;

/// Name of the notify-send executable
pub const NOTIFY_SEND: &str = "notify-send";

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Program to run, looked up in PATH
    program: String,
    settings: NotificationSettings,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new(settings: NotificationSettings) -> Self {
        Self::with_program(NOTIFY_SEND, settings)
    }

    /// Create with a custom program name or path
    pub fn with_program(program: impl Into<String>, settings: NotificationSettings) -> Self {
        Self {
            program: program.into(),
            settings,
        }
    }

    /// Command line arguments for one notification
    fn args(&self, title: &str, body: &str) -> Vec<String> {
        let mut args = vec![
            format!("--app-name={}", self.settings.app_name),
            format!("--urgency={}", self.settings.urgency),
        ];
        if let Some(ref icon) = self.settings.icon {
            args.push(format!("--icon={}", icon.display()));
        }
        args.push(title.to_string());
        args.push(body.to_string());
        args
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new(NotificationSettings::default())
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotificationError> {
        let output = Command::new(&self.program)
            .args(self.args(title, body))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::ToolMissing {
                        tool: self.program.clone(),
                    }
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(status = %output.status, %stdout, %stderr, "notify-send failed");
            return Err(NotificationError::SendFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
