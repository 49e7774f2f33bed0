//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like notify-send, the notification
//! daemon, the config file and the system clock.

pub mod clock;
pub mod config;
pub mod notification;

// Re-export adapters
pub use clock::{FixedClock, LocalClock, SystemClock};
pub use config::XdgConfigStore;
pub use notification::{
    create_notifier, resolve_icon, NotificationSettings, NotifyRustNotifier, NotifySendNotifier,
};
