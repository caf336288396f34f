//! Filesystem-based personal keystore.
//!
//! Stores one identity record per key name in `<root>/keys/<name>.json`.
//! The root and `keys/` directory are created with mode 0700 and each record
//! with mode 0600.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Store;
use crate::core::domain::Identity;
use crate::core::{cipher, codec, constants, files, validation};
use crate::error::{Error, Result, StoreError};

/// Filesystem-based key storage rooted at an explicit directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    /// Keystore rooted at `root` (usually `~/.lockbox`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the key records.
    pub fn keys_dir(&self) -> PathBuf {
        self.root.join(constants::KEYS_DIR)
    }

    /// Record path for a key name.
    fn record_path(&self, name: &str) -> PathBuf {
        self.keys_dir()
            .join(format!("{}.{}", name, constants::RECORD_EXT))
    }

    fn load(&self, name: &str, path: &Path) -> Result<Identity> {
        let contents = zeroize::Zeroizing::new(fs::read_to_string(path).map_err(|e| {
            match e.kind() {
                ErrorKind::NotFound => StoreError::NotFound(name.to_string()).into(),
                _ => Error::file(path, e),
            }
        })?);

        #[cfg(unix)]
        {
            if let Err(e) = validation::validate_file_permissions(path, 0o600) {
                warn!(key = %name, "{}", e);
            }
        }

        codec::decode_record(&contents)
    }
}

impl Store for Filesystem {
    fn generate(&self, name: &str) -> Result<Identity> {
        validation::validate_key_name(name)?;
        debug!(key = %name, root = %self.root.display(), "generating key");

        if self.has(name) {
            return Err(StoreError::DuplicateName(name.to_string()).into());
        }

        let identity = cipher::generate_identity(name);
        let record = zeroize::Zeroizing::new(codec::encode_record(&identity)?);

        files::create_private_dir(&self.root)?;
        files::create_private_dir(&self.keys_dir())?;

        let path = self.record_path(name);
        files::create_private(&path, record.as_bytes()).map_err(|e| match e {
            Error::File { source, .. } if source.kind() == ErrorKind::AlreadyExists => {
                StoreError::DuplicateName(name.to_string()).into()
            }
            other => other,
        })?;

        debug!(key = %name, path = %path.display(), "key saved");
        Ok(identity)
    }

    fn list(&self) -> Result<Vec<Identity>> {
        let dir = self.keys_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::file(&dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::file(&dir, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(constants::RECORD_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push((stem.to_string(), path));
            }
        }
        names.sort();

        let identities = names
            .iter()
            .map(|(name, path)| self.load(name, path))
            .collect::<Result<Vec<_>>>()?;

        debug!(count = identities.len(), "listed keys");
        Ok(identities)
    }

    fn get(&self, name: &str) -> Result<Identity> {
        validation::validate_key_name(name)
            .map_err(|_| Error::from(StoreError::NotFound(name.to_string())))?;
        self.load(name, &self.record_path(name))
    }

    fn remove(&self, name: &str) -> Result<()> {
        validation::validate_key_name(name)
            .map_err(|_| Error::from(StoreError::NotFound(name.to_string())))?;

        let path = self.record_path(name);
        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(name.to_string()).into(),
            _ => Error::file(&path, e),
        })?;

        debug!(key = %name, "key removed");
        Ok(())
    }

    fn has(&self, name: &str) -> bool {
        validation::validate_key_name(name).is_ok() && self.record_path(name).exists()
    }
}
