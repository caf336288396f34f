//! Repository membership identity.
//!
//! A member may designate one of their personal keys as "my key for this
//! repository". The full identity record is copied to
//! `.lockbox/private.key` (mode 0600), which is git-ignored so it never
//! leaves the machine.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::domain::Identity;
use crate::core::{codec, constants, files};
use crate::error::{Error, Result};

/// The membership identity file of one repository.
#[derive(Debug, Clone)]
pub struct Membership {
    path: PathBuf,
}

impl Membership {
    /// Membership file at `path` (usually `<repo>/.lockbox/private.key`).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store `identity` as this repository's membership key, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::MissingPrivateKey` for a public-only identity.
    pub fn save(&self, identity: &Identity) -> Result<()> {
        let record = zeroize::Zeroizing::new(codec::encode_record(identity)?);
        files::write_private(&self.path, record.as_bytes())?;
        debug!(key = %identity.name(), path = %self.path.display(), "membership saved");
        Ok(())
    }

    /// The membership identity, or `None` if none was designated.
    pub fn load(&self) -> Result<Option<Identity>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => zeroize::Zeroizing::new(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::file(&self.path, e)),
        };
        codec::decode_record(&contents).map(Some)
    }

    /// Forget the membership identity. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::file(&self.path, e)),
        }
    }
}

/// Ensure `<dir>/.gitignore` lists the membership key file.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore(dir: &Path) -> Result<()> {
    let gitignore = dir.join(".gitignore");

    let existing = match fs::read_to_string(&gitignore) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(Error::file(&gitignore, e)),
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        files::write(&gitignore, updated.as_bytes())?;
    }

    Ok(())
}
