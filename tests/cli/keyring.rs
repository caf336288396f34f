//! Tests for `lockbox keyring` against an isolated GnuPG home.

use crate::skip_without_gpg;
use crate::support::*;
use lockbox::core::keyring::{Gpg, Keyring};
use lockbox::error::{Error, KeyringError};
use tempfile::TempDir;

#[test]
fn test_unavailable_program() {
    let t = Test::new();
    std::fs::write(
        t.home.path().join("config.toml"),
        "gpg_program = \"lockbox-no-such-gpg\"\n",
    )
    .unwrap();

    let output = t.cmd().args(["keyring", "list"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not found on PATH");
}

#[test]
fn test_empty_keyring_lists_nothing() {
    skip_without_gpg!();
    let gnupg = TempDir::new().unwrap();
    let gpg = match Gpg::locate("gpg") {
        Ok(gpg) => gpg.with_homedir(gnupg.path()),
        Err(_) => return,
    };

    assert!(gpg.list_keys(false).unwrap().is_empty());
}

#[test]
fn test_export_unknown_key() {
    skip_without_gpg!();
    let gnupg = TempDir::new().unwrap();
    let gpg = match Gpg::locate("gpg") {
        Ok(gpg) => gpg.with_homedir(gnupg.path()),
        Err(_) => return,
    };

    let err = gpg.export("nobody@example.com").unwrap_err();
    assert!(matches!(err, Error::Keyring(KeyringError::NotFound(_))));
}
