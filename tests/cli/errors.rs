//! Error reporting and hints.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_unknown_key_hints_key_list() {
    let t = Test::with_member("alice");
    t.write("secret.txt", b"x");
    t.encrypt("secret.txt");

    t.cmd()
        .args(["secret", "decrypt", "secret.txt.encrypted", "--key", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no key named 'ghost'"))
        .stderr(predicate::str::contains("lockbox key list"));
}

#[test]
fn test_malformed_roster_names_line() {
    let t = Test::init();
    std::fs::write(
        t.path(".lockbox/keys.txt"),
        format!("# bob\n{}\n{}\n", BOB_PUBLIC_KEY, BOB_PUBLIC_KEY),
    )
    .unwrap();

    t.cmd()
        .args(["team", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_malformed_settings() {
    let t = Test::new();
    std::fs::write(t.home.path().join("config.toml"), "armor = [").unwrap();

    t.cmd()
        .args(["key", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse settings"));
}

#[test]
fn test_missing_input_file_names_path() {
    let t = Test::with_member("alice");

    t.cmd()
        .args(["secret", "encrypt", "missing.txt", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_no_keys_hint() {
    let t = Test::init();

    t.cmd()
        .args(["team", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no personal keys"))
        .stderr(predicate::str::contains("lockbox key add"));
}

#[test]
fn test_completions() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lockbox"));
}
