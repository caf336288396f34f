//! Test support utilities for lockbox integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use lockbox::core::membership::Membership;
use lockbox::core::store::Filesystem;
use lockbox::core::team::Roster;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// `dir` is a fake git repository (it has a `.git` directory) and `home` is
/// the keystore root. Child processes get both through `.current_dir()` and
/// `LOCKBOX_HOME`, so tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
    pub home: TempDir,
}

impl Test {
    /// Empty repository, not yet initialized.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        std::fs::create_dir(dir.path().join(".git")).expect("failed to create .git");
        Self { dir, home }
    }

    /// Repository with `lockbox init` already run.
    pub fn init() -> Self {
        let t = Self::new();
        assert_success(&t.init_cmd());
        t
    }

    /// Initialized repository where `name` has a key and is on the roster.
    pub fn with_member(name: &str) -> Self {
        let t = Self::init();
        assert_success(&t.key_add(name));
        assert_success(&t.team_add_me(name));
        t
    }

    /// In-process view of the keystore.
    pub fn store(&self) -> Filesystem {
        Filesystem::new(self.home.path())
    }

    /// In-process view of the roster.
    pub fn roster(&self) -> Roster {
        Roster::new(self.dir.path().join(".lockbox").join("keys.txt"))
    }

    pub fn membership(&self) -> Membership {
        Membership::new(self.dir.path().join(".lockbox").join("private.key"))
    }

    /// Path inside the repository.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file inside the repository.
    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }
}
