//! CLI integration tests

use std::process::Command;

const SYMPTOME_DAY: &str = "Chalut ! Aujourd'hui, Mitanche 2, c'est la Saint-symptôme.\n\
                            Bonne fête à tous les symptômes 🎆\n";

fn lola_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lola-announce"))
}

/// Command isolated from the user's config and cache
fn isolated(home: &tempfile::TempDir) -> Command {
    let mut cmd = lola_bin();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env_remove("LOLA_ANNOUNCE_DATE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let output = lola_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--stdout"));
    assert!(stdout.contains("notification"));
}

#[test]
fn version_output() {
    let output = lola_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lola-announce"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn stdout_announcement_for_injected_date() {
    let home = tempfile::tempdir().unwrap();
    let output = isolated(&home)
        .arg("--stdout")
        .env("LOLA_ANNOUNCE_DATE", "2025-11-02")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SYMPTOME_DAY);
}

#[test]
fn stdout_announcement_for_today() {
    let home = tempfile::tempdir().unwrap();
    let output = isolated(&home)
        .arg("--stdout")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected output: {}", stdout);
    assert!(lines[0].starts_with("Chalut ! Aujourd'hui, "));
    assert!(lines[1].starts_with("Bonne fête à "));
    assert!(stdout.ends_with("🎆\n"));
}

#[test]
fn feminine_day_uses_sainte() {
    let home = tempfile::tempdir().unwrap();
    let output = isolated(&home)
        .arg("--stdout")
        .env("LOLA_ANNOUNCE_DATE", "2025-01-01")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Chalut ! Aujourd'hui, Morquidi 1, c'est la Sainte-veisalgie.\n\
         Bonne fête à toutes les veisalgies 🎆\n"
    );
}

#[test]
fn leap_day_has_an_announcement() {
    let home = tempfile::tempdir().unwrap();
    let output = isolated(&home)
        .arg("--stdout")
        .env("LOLA_ANNOUNCE_DATE", "2024-02-29")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Chalut ! Aujourd'hui, Jourdi 29, c'est la "));
}

#[test]
fn invalid_date_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let output = isolated(&home)
        .arg("--stdout")
        .env("LOLA_ANNOUNCE_DATE", "2025-02-30")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid date") && stderr.contains("LOLA_ANNOUNCE_DATE"),
        "Expected error about invalid date, got: {}",
        stderr
    );
}

#[test]
fn unknown_flag_error() {
    let output = lola_bin()
        .arg("--loud")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unexpected argument"),
        "Expected clap usage error, got: {}",
        stderr
    );
}
