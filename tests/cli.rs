use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Runs `motus` in an empty directory with no inherited configuration.
fn motus(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("motus");
    cmd.env_clear().current_dir(dir.path());
    cmd
}

#[test]
fn health_checkin_prints_form() {
    let dir = TempDir::new().expect("create temp dir");
    let out = motus(&dir)
        .arg("health-checkin")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("💪 DAILY HEALTH CHECK-IN"));
    assert!(text.contains("🏃 ACTIVITY TRACKING"));
}

#[test]
fn tomorrow_without_key_exits_non_zero() {
    let dir = TempDir::new().expect("create temp dir");
    let assert = motus(&dir).args(["weather", "tomorrow"]).assert().failure().code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("WEATHER_API_KEY not found"));
}

#[test]
fn social_without_key_prints_error_object() {
    let dir = TempDir::new().expect("create temp dir");
    let out = motus(&dir)
        .arg("social")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(json["error"], "TWITTER_API_KEY not found in environment variables");
    assert!(json["timestamp"].is_string());
}

#[test]
fn env_file_supplies_configuration() {
    let dir = TempDir::new().expect("create temp dir");
    std::fs::write(dir.path().join(".env"), "TWITTER_API_KEY=from-dotenv\n").unwrap();

    let out = motus(&dir)
        .arg("social")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // the key was picked up, so the next missing setting is reported
    let json: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(json["error"], "TWITTER_USER_ID not found in environment variables");
}

#[test]
fn notion_connection_without_key_fails() {
    let dir = TempDir::new().expect("create temp dir");
    motus(&dir)
        .args(["notion", "connection"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing NOTION_API_KEY"));
}

#[test]
fn malformed_env_file_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    std::fs::write(dir.path().join(".env"), "TWITTER_API_KEY=\"unterminated\n").unwrap();

    motus(&dir)
        .arg("health-checkin")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not load .env"));
}

#[test]
fn missing_env_file_is_silent() {
    let dir = TempDir::new().expect("create temp dir");
    motus(&dir)
        .arg("health-checkin")
        .assert()
        .success()
        .stderr(predicate::str::contains(".env").not());
}
