//! Binary-level tests for the `keycast` CLI.
//!
//! These cover argument handling, manifest errors and store-connection
//! failures. Engine behavior is tested against an in-memory store in
//! keycast-sync; nothing here requires a running Redis.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn keycast() -> Command {
    Command::cargo_bin("keycast").expect("binary built")
}

#[test]
fn help_lists_subcommands() {
    keycast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("dump"));
}

#[test]
fn sync_without_manifest_fails_with_context() {
    let dir = TempDir::new().unwrap();
    keycast()
        .current_dir(dir.path())
        .args(["sync", "--no-pull"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load manifest"));
}

#[test]
fn sync_with_malformed_manifest_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("keycast.yaml"), "version: [broken").unwrap();
    keycast()
        .current_dir(dir.path())
        .args(["sync", "--no-pull"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse manifest"));
}

#[test]
fn init_scaffolds_a_manifest_once() {
    let dir = TempDir::new().unwrap();
    keycast()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("keycast.yaml"));
    assert!(dir.path().join("keycast.yaml").exists());

    keycast()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn sync_fails_fast_when_the_store_is_unreachable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("app.yaml"), "x: 1\n").unwrap();
    // Port 1 is never a redis server.
    std::fs::write(
        dir.path().join("keycast.yaml"),
        "version: 1\n\
         redis_url: redis://127.0.0.1:1/\n\
         artifacts:\n\
         - key: app:config\n\
         \x20 pattern: app.yaml\n",
    )
    .unwrap();

    keycast()
        .current_dir(dir.path())
        .args(["sync", "--no-pull"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot connect"));
}

#[test]
fn dump_fails_cleanly_when_the_store_is_unreachable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("keycast.yaml"),
        "version: 1\nredis_url: redis://127.0.0.1:1/\nartifacts: []\n",
    )
    .unwrap();

    keycast()
        .current_dir(dir.path())
        .args(["dump", "some:key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot connect"));
}
