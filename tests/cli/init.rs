//! Tests for `lockbox init`.

use crate::support::*;

#[test]
fn test_init_creates_lockbox_dir() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");

    assert!(t.path(".lockbox").is_dir());
    assert_eq!(std::fs::read_to_string(t.path(".lockbox/keys.txt")).unwrap(), "");
    let gitignore = std::fs::read_to_string(t.path(".lockbox/.gitignore")).unwrap();
    assert!(gitignore.lines().any(|l| l == "private.key"));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_from_subdirectory_uses_repo_root() {
    let t = Test::new();
    std::fs::create_dir_all(t.path("app/config")).unwrap();

    let output = t
        .cmd()
        .current_dir(t.path("app/config"))
        .arg("init")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path(".lockbox").is_dir());
    assert!(!t.path("app/config/.lockbox").exists());
}

#[test]
fn test_init_outside_repository_fails() {
    let t = Test::new();
    std::fs::remove_dir(t.path(".git")).unwrap();
    if t.dir.path().ancestors().any(|d| d.join(".git").exists()) {
        return;
    }

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "not inside a git repository");
}
