//! Team roster management.
//!
//! The roster is the repository's list of members who can decrypt secrets,
//! kept in one text file (`.lockbox/keys.txt`) that is committed alongside the
//! encrypted files. Appends add records at the end; removal drops the first
//! matching record and rewrites the file canonically.
//!
//! There is no locking. Two people editing the roster at once race like any
//! other tracked file and reconcile through version control.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::domain::Identity;
use crate::core::types::PublicKey;
use crate::core::{cipher, codec, files, validation};
use crate::error::{Error, Result};

/// A repository's team roster file.
#[derive(Debug, Clone)]
pub struct Roster {
    path: PathBuf,
}

impl Roster {
    /// Roster stored at `path` (usually `<repo>/.lockbox/keys.txt`).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a member's public key to the end of the roster.
    ///
    /// Creates the file if absent. Only the name and public key are written,
    /// even if `identity` carries a private key. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an unusable name and
    /// `CipherError::InvalidRecipient` for a public key that does not parse.
    pub fn append(&self, identity: &Identity) -> Result<()> {
        self.append_all(std::slice::from_ref(identity))
    }

    /// Append several members in order with a single write.
    ///
    /// Every record is validated before the file is touched, so one bad
    /// record leaves the roster as it was.
    pub fn append_all(&self, members: &[Identity]) -> Result<()> {
        for member in members {
            validation::validate_member_name(member.name())?;
            cipher::parse_recipient(member.public_key())?;
        }
        if members.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::file(parent, e))?;
        }

        let mut entries: String = members.iter().map(codec::encode_roster_entry).collect();
        if !self.ends_with_newline()? {
            entries.insert(0, '\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::file(&self.path, e))?;
        file.write_all(entries.as_bytes())
            .map_err(|e| Error::file(&self.path, e))?;

        debug!(count = members.len(), path = %self.path.display(), "members appended");
        Ok(())
    }

    /// All roster records, in file order, without private keys.
    ///
    /// A missing or empty roster yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the roster is malformed.
    pub fn list(&self) -> Result<Vec<Identity>> {
        match self.read()? {
            Some(text) => codec::decode_roster(&text),
            None => Ok(Vec::new()),
        }
    }

    /// Public keys of every roster record, in file order.
    pub fn recipients(&self) -> Result<Vec<PublicKey>> {
        Ok(self
            .list()?
            .into_iter()
            .map(|member| member.public_key().to_string())
            .collect())
    }

    /// First record with the given name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Identity>> {
        Ok(self.list()?.into_iter().find(|member| member.name() == name))
    }

    /// Remove the first record whose key equals `public_key`.
    ///
    /// Returns whether a record was removed. Removing a key that is not in
    /// the roster is a no-op and leaves the file untouched.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the roster is malformed.
    pub fn remove(&self, public_key: &str) -> Result<bool> {
        self.remove_first(|member| member.public_key() == public_key)
    }

    /// Remove the first record with both the name and key of `member`.
    ///
    /// Records sharing the key under another name are kept.
    pub fn remove_member(&self, member: &Identity) -> Result<bool> {
        self.remove_first(|m| m.name() == member.name() && m.public_key() == member.public_key())
    }

    fn remove_first(&self, matches: impl Fn(&Identity) -> bool) -> Result<bool> {
        let mut members = self.list()?;

        let Some(index) = members.iter().position(|member| matches(member)) else {
            debug!(path = %self.path.display(), "no roster record matches");
            return Ok(false);
        };

        let removed = members.remove(index);
        files::write(&self.path, codec::encode_roster(&members).as_bytes())?;

        debug!(
            member = %removed.name(),
            remaining = members.len(),
            "member removed"
        );
        Ok(true)
    }

    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::file(&self.path, e)),
        }
    }

    fn ends_with_newline(&self) -> Result<bool> {
        Ok(match self.read()? {
            Some(text) => text.is_empty() || text.ends_with('\n'),
            None => true,
        })
    }
}
