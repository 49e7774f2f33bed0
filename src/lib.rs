//! lola-announce - Lola's daily announcement of the hallowed object
//!
//! Looks up the object celebrated today in a compiled-in calendar and
//! announces it as a desktop notification or on standard output. Meant to
//! be run once a day by an external timer.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Calendar table, announcement message, config and errors
//! - **Application**: Announce use case, output channel and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-send, notify-rust, XDG config, clock)
//! - **CLI**: Command-line interface, argument parsing and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
