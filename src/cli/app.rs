//! Main app runner

use std::env;
use std::io::{self, Stdout};
use std::process::ExitCode;

use tracing::{debug, info};

use crate::application::ports::{ConfigStore, Notifier};
use crate::application::{AnnounceUseCase, OutputChannel};
use crate::domain::calendar::CalendarTable;
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_notifier, resolve_icon, NotificationSettings, SystemClock, XdgConfigStore,
};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable replacing today's date (YYYY-MM-DD)
pub const DATE_ENV_VAR: &str = "LOLA_ANNOUNCE_DATE";

type Channel = OutputChannel<Box<dyn Notifier>, Stdout>;

/// Announce the hallowed object of the day once
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();
    let config = load_merged_config(&store, &presenter).await;

    let date = match config.date() {
        Ok(date) => date,
        Err(e) => {
            presenter.error(&format!("{} (from {})", e, DATE_ENV_VAR));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let use_case = AnnounceUseCase::new(CalendarTable::builtin(), SystemClock::from_override(date));
    let mut channel = select_channel(cli.stdout, &config).await;

    match use_case.execute(&mut channel).await {
        Ok(output) => {
            info!(
                date = %output.date,
                used_fallback = output.used_fallback,
                title = output.message.title(),
                "announced"
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Build the output channel for this run
async fn select_channel(use_stdout: bool, config: &AppConfig) -> Channel {
    if use_stdout {
        return OutputChannel::Stdout(io::stdout());
    }

    let icon = resolve_icon(config.icon.clone()).await;
    let settings = NotificationSettings::from_config(config, icon);
    let kind = config.notifier_or_default();
    debug!(notifier = %kind, ?settings, "notification channel selected");

    OutputChannel::Notify(create_notifier(kind, settings))
}

/// Load and merge configuration from file and env.
///
/// A broken config file is reported and ignored so the scheduled
/// announcement still goes out.
pub async fn load_merged_config<S: ConfigStore>(store: &S, presenter: &Presenter) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("{} ({}), using defaults", e, store.path().display()));
            AppConfig::empty()
        }
    };

    // Build env config
    let env_config = AppConfig {
        date: env::var(DATE_ENV_VAR).ok().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env
    AppConfig::defaults().merge(file_config).merge(env_config)
}
