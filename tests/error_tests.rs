//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn lola_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lola-announce"))
}

/// Command with an empty PATH and private config/cache dirs
fn without_notify_send(home: &tempfile::TempDir) -> Command {
    let bin_dir = home.path().join("bin");
    std::fs::create_dir_all(&bin_dir).unwrap();

    let mut cmd = lola_bin();
    cmd.env("PATH", &bin_dir)
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env("LOLA_ANNOUNCE_DATE", "2025-11-02")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_notify_send_exits_non_zero() {
    let home = tempfile::tempdir().unwrap();

    without_notify_send(&home)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("notify-send not found"));
}

#[test]
fn stdout_mode_never_calls_notify_send() {
    let home = tempfile::tempdir().unwrap();

    without_notify_send(&home)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saint-symptôme"));
}

#[cfg(target_os = "linux")]
#[test]
fn malformed_config_is_reported_and_ignored() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("config").join("lola-announce");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "urgency = [").unwrap();

    without_notify_send(&home)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Chalut !"))
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn empty_date_override_means_today() {
    let home = tempfile::tempdir().unwrap();

    without_notify_send(&home)
        .arg("--stdout")
        .env("LOLA_ANNOUNCE_DATE", "")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Chalut ! Aujourd'hui, "));
}

#[test]
fn garbage_date_override_is_rejected() {
    let home = tempfile::tempdir().unwrap();

    without_notify_send(&home)
        .arg("--stdout")
        .env("LOLA_ANNOUNCE_DATE", "demain")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"demain\""));
}

#[test]
fn info_log_reports_announced_day() {
    let home = tempfile::tempdir().unwrap();

    without_notify_send(&home)
        .arg("--stdout")
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Chalut !"))
        .stderr(predicate::str::contains("announced"))
        .stderr(predicate::str::contains("used_fallback"))
        .stderr(predicate::str::contains("2025-11-02"));
}
