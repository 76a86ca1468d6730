//! Tests for `marmoset add/get/default/rm/list` commands.

use crate::support::*;

#[test]
fn test_add_and_get_roundtrip() {
    let t = Test::new();

    let output = t.add("alice", "pw1");
    assert_success(&output);
    assert_stdout_contains(&output, "stored alice");

    assert_lookup(&t, Some("alice"), ("alice", "pw1"));
}

#[test]
fn test_first_user_is_default() {
    let t = Test::with_users(STANDARD_USERS);

    assert_lookup(&t, None, ("alice", "pw1"));
    assert_lookup(&t, Some("bob"), ("bob", "pw2"));
}

#[test]
fn test_get_hides_password_by_default() {
    let t = Test::with_users(STANDARD_USERS);

    let output = t.cmd().args(["get", "bob"]).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "bob");
}

#[test]
fn test_get_json() {
    let t = Test::with_users(STANDARD_USERS);

    let output = t
        .cmd()
        .args(["get", "--json", "--show-password"])
        .output()
        .unwrap();
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(parsed["username"], "alice");
    assert_eq!(parsed["password"], "pw1");
}

#[test]
fn test_add_existing_user_updates_password() {
    let t = Test::with_users(&[("alice", "pw1")]);

    let output = t.add("alice", "changed");
    assert_success(&output);
    assert_stdout_contains(&output, "updated password for alice");

    assert_lookup(&t, Some("alice"), ("alice", "changed"));
}

#[test]
fn test_add_substring_of_existing_user() {
    let t = Test::with_users(&[("alice", "pw1")]);

    let output = t.add("al", "pw2");
    assert_success(&output);
    assert_stdout_contains(&output, "stored al");

    assert_lookup(&t, Some("al"), ("al", "pw2"));
}

#[test]
fn test_default_switches_default_user() {
    let t = Test::with_users(STANDARD_USERS);

    let output = t.default_user("bob");
    assert_success(&output);
    assert_stdout_contains(&output, "bob is now the default user");

    assert_lookup(&t, None, ("bob", "pw2"));
}

#[test]
fn test_default_unknown_user_fails() {
    let t = Test::with_users(STANDARD_USERS);

    let output = t.default_user("mallory");
    assert_failure(&output);
    assert_stderr_contains(&output, "mallory is not a known user");

    assert_lookup(&t, None, ("alice", "pw1"));
}

#[test]
fn test_rm_removes_user_and_password() {
    let t = Test::with_users(STANDARD_USERS);

    let output = t.rm("alice");
    assert_success(&output);
    assert_stdout_contains(&output, "removed alice");

    let output = t.get(Some("alice"));
    assert_failure(&output);
    assert_stderr_contains(&output, "alice is not a known user");

    let store = t.store_json();
    let entries = &store["services"]["marmoset"];
    assert!(entries.get("alice").is_none());
    assert_eq!(entries["_config_student"], "bob");
    assert!(entries.get("student").is_none());
}

#[test]
fn test_rm_unknown_user_leaves_store_untouched() {
    let t = Test::with_users(STANDARD_USERS);
    let before = std::fs::read_to_string(t.store_path()).unwrap();

    let output = t.rm("mallory");
    assert_failure(&output);

    let after = std::fs::read_to_string(t.store_path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_list_marks_default() {
    let t = Test::with_users(STANDARD_USERS);

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "alice (default)");
    assert_stdout_contains(&output, "bob");
    assert_stdout_excludes(&output, "bob (default)");
}

#[test]
fn test_list_empty() {
    let t = Test::new();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "no users stored");
    assert!(!t.store_path().exists());
}

#[test]
fn test_list_json() {
    let t = Test::with_users(STANDARD_USERS);
    assert_success(&t.default_user("bob"));

    let output = t.list_json();
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(parsed["owner"], "student");
    assert_eq!(parsed["default"], "bob");
    assert_eq!(parsed["users"], serde_json::json!(["bob", "alice"]));
    assert_eq!(parsed["count"], 2);
}

#[test]
fn test_owners_are_isolated() {
    let t = Test::with_users(STANDARD_USERS);

    let output = t
        .cmd()
        .args(["--owner", "someone-else", "get"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no users stored for someone-else");
}

#[test]
fn test_get_listed_user_with_deleted_password() {
    let t = Test::with_users(STANDARD_USERS);

    // Credential keys are shared between owners.
    let other = ["--owner", "someone-else"];
    let output = t
        .cmd()
        .args(other)
        .args(["add", "alice", "--password", "x"])
        .output()
        .unwrap();
    assert_success(&output);
    let output = t.cmd().args(other).args(["rm", "alice"]).output().unwrap();
    assert_success(&output);

    let output = t.cmd().arg("get").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no password stored for alice");
    assert_stderr_contains(&output, "marmoset add");

    let output = t.get(Some("alice"));
    assert_failure(&output);
    assert_stderr_contains(&output, "no password stored for alice");

    assert_stdout_contains(&t.list(), "alice (default)");
}

#[test]
fn test_full_scenario() {
    let t = Test::with_users(STANDARD_USERS);

    assert_lookup(&t, None, ("alice", "pw1"));

    assert_success(&t.default_user("bob"));
    assert_lookup(&t, None, ("bob", "pw2"));

    assert_success(&t.rm("alice"));
    assert_failure(&t.get(Some("alice")));
    assert_lookup(&t, None, ("bob", "pw2"));
}

#[test]
fn test_whoami_reports_backend() {
    let t = Test::new();

    let output = t.cmd().arg("whoami").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "student");
    assert_stdout_contains(&output, "marmoset");
    assert_stdout_contains(&output, "file");
}
