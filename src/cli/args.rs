//! CLI argument definitions using Clap

use clap::Parser;

/// Lola's daily announcement of the hallowed object
#[derive(Parser, Debug)]
#[command(name = "lola-announce")]
#[command(version)]
#[command(about = "Announce the hallowed object of the day as a desktop notification")]
#[command(long_about = None)]
pub struct Cli {
    /// Print the announcement on standard output instead of notifying
    #[arg(long)]
    pub stdout: bool,
}
