//! Application layer - Use cases and port interfaces
//!
//! Contains the announce use case, the output channel switch and
//! trait definitions for external system interactions.

pub mod announce;
pub mod channel;
pub mod ports;

// Re-export use cases
pub use announce::{AnnounceError, AnnounceOutput, AnnounceUseCase};
pub use channel::OutputChannel;
