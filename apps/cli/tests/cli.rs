use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const MANIFEST: &str = "AuthGuard\nAuthService\nDifferenceService\nFirebaseService\n\
HighlightService\nNotificationService\nEncodingService\nLocalserverService\n";

fn reviewer() -> Command {
    let mut cmd = Command::cargo_bin("reviewer").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_prints_the_manifest() {
    reviewer().arg("list").assert().success().stdout(MANIFEST);
}

#[test]
fn compose_prints_services_in_manifest_order() {
    reviewer()
        .arg("compose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 AuthGuard\n1 AuthService\n"))
        .stdout(predicate::str::contains("7 LocalserverService\n"));
}

#[test]
fn compose_reports_invalid_sections() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("reviewer.toml");
    fs::write(&path, "[notification]\nduration_ms = 0\n")?;

    reviewer()
        .args(["compose", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("NotificationService"));
    Ok(())
}

#[test]
fn compose_logs_the_configuration_source() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("reviewer.toml");
    fs::write(&path, "[localserver]\nport = 7100\n")?;

    reviewer()
        .args(["compose", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration loaded from"))
        .stderr(predicate::str::contains("reviewer.toml"))
        .stderr(predicate::str::contains("Service graph composed"));

    reviewer()
        .arg("compose")
        .assert()
        .success()
        .stderr(predicate::str::contains("No config file given"));
    Ok(())
}

#[test]
fn environment_overrides_reach_the_graph() {
    reviewer()
        .arg("compose")
        .env("REVIEWER__LOCALSERVER__PORT", "0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("port must be non-zero"));
}

#[test]
fn missing_config_file_fails() {
    reviewer()
        .args(["--config", "does-not-exist.toml", "compose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
