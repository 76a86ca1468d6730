//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("Usage"));
    for command in ["add", "get", "default", "rm", "list"] {
        assert!(out.contains(command), "help missing '{}'", command);
    }
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("marmoset"));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_marmoset"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_get_without_users_fails_with_hint() {
    let t = Test::new();

    t.cmd()
        .arg("get")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no users stored for student"))
        .stderr(predicate::str::contains("marmoset add"));
}

#[test]
fn test_get_unknown_user_fails_with_hint() {
    let t = Test::with_users(STANDARD_USERS);

    t.cmd()
        .args(["get", "carol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("carol is not a known user"))
        .stderr(predicate::str::contains("marmoset list"));
}

#[test]
fn test_default_requires_username_argument() {
    let t = Test::new();

    let output = t.cmd().arg("default").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_default_empty_username_fails() {
    let t = Test::with_users(STANDARD_USERS);

    t.cmd()
        .args(["default", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a username, given none"));
}

#[test]
fn test_add_rejects_comma_in_username() {
    let t = Test::new();

    let output = t.add("alice,bob", "pw");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid username");
    assert!(!t.store_path().exists());
}

#[test]
fn test_add_rejects_empty_username() {
    let t = Test::new();

    let output = t.add("", "pw");
    assert_failure(&output);
    assert_stderr_contains(&output, "username cannot be empty");
}

#[test]
fn test_unknown_backend_fails() {
    let t = Test::new();

    t.cmd()
        .env("MARMOSET_BACKEND", "vault")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown backend 'vault'"));
}

#[test]
fn test_corrupt_store_reported() {
    let t = Test::new();
    std::fs::write(t.store_path(), "{not json").unwrap();

    t.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid secret store format"));
}

#[test]
fn test_config_file_selects_service() {
    let t = Test::new();
    std::fs::write(
        t.home.path().join("config.toml"),
        "service = \"marmoset-staging\"\n",
    )
    .unwrap();

    assert_success(&t.add("alice", "pw1"));

    let store = t.store_json();
    assert_eq!(store["services"]["marmoset-staging"]["alice"], "pw1");
    assert!(store["services"].get("marmoset").is_none());
}
