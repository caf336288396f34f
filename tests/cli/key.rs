//! Tests for `lockbox key` commands.

use crate::support::*;
use lockbox::core::store::Store;

#[test]
fn test_key_add_and_list() {
    let t = Test::new();

    let output = t.key_add("work");
    assert_success(&output);
    assert_stdout_contains(&output, "created key work");
    assert_stdout_contains(&output, "age1");

    let output = t.key_list();
    assert_success(&output);
    assert_stdout_contains(&output, "work");
    assert_stdout_excludes(&output, "AGE-SECRET-KEY");
}

#[test]
fn test_key_list_json() {
    let t = Test::new();
    t.key_add("work");
    t.key_add("personal");

    let output = t.key_list_json();
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["personal", "work"]);
}

#[test]
fn test_key_list_empty() {
    let t = Test::new();
    let output = t.key_list();
    assert_success(&output);
    assert_stdout_contains(&output, "no personal keys");
}

#[test]
fn test_key_add_duplicate_fails() {
    let t = Test::new();
    assert_success(&t.key_add("work"));
    let before = t.store().get("work").unwrap();

    let output = t.key_add("work");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_eq!(t.store().get("work").unwrap(), before);
}

#[test]
fn test_key_add_without_name_needs_terminal() {
    let t = Test::new();
    let output = t.cmd().args(["key", "add"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not a terminal");
}

#[test]
fn test_key_remove() {
    let t = Test::new();
    t.key_add("work");

    assert_success(&t.key_remove("work"));
    assert!(!t.store().has("work"));

    let output = t.key_remove("work");
    assert_failure(&output);
    assert_stderr_contains(&output, "no key named 'work'");
}

#[cfg(unix)]
#[test]
fn test_key_files_are_private() {
    let t = Test::new();
    t.key_add("work");
    assert_mode(&t.home.path().join("keys"), 0o700);
    assert_mode(&t.home.path().join("keys/work.json"), 0o600);
}

#[test]
fn test_key_use_writes_membership() {
    let t = Test::init();
    t.key_add("work");

    assert_success(&t.key_use("work"));
    let member = t.membership().load().unwrap().expect("membership key saved");
    assert_eq!(member, t.store().get("work").unwrap());
}

#[test]
fn test_key_add_with_use() {
    let t = Test::init();
    let output = t
        .cmd()
        .args(["key", "add", "--name", "work", "--use"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.membership().load().unwrap().is_some());
}

#[test]
fn test_key_remove_clears_membership() {
    let t = Test::init();
    t.key_add("work");
    t.key_use("work");

    assert_success(&t.key_remove("work"));
    assert!(t.membership().load().unwrap().is_none());
}

#[test]
fn test_key_use_requires_init() {
    let t = Test::new();
    t.key_add("work");

    let output = t.key_use("work");
    assert_failure(&output);
    assert_stderr_contains(&output, "lockbox init");
}
