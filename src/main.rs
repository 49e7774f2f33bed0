//! lola-announce CLI entry point

use std::process::ExitCode;

use clap::Parser;

use lola_announce::cli::{init_logging, run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    run(cli).await
}
