//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("{tool} not found. Install it or run with --stdout")]
    ToolMissing { tool: String },

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `body` - The notification body
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotificationError> {
        self.as_ref().notify(title, body).await
    }
}
