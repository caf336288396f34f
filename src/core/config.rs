//! User settings and path resolution.
//!
//! Settings live in `<home>/config.toml`, where `<home>` is the personal
//! keystore root (`$LOCKBOX_HOME`, else `~/.lockbox`). Every field is
//! optional; a missing file means defaults.
//!
//! Path resolution from the environment happens here and only here. The
//! stores themselves are always constructed with explicit paths.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Error, Result, StoreError};

/// Settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Produce ASCII-armored envelopes instead of binary ones
    pub armor: bool,
    /// Suffix appended to encrypted files
    pub suffix: String,
    /// Personal key used for decryption when none is chosen explicitly
    pub default_key: Option<String>,
    /// External keyring program
    pub gpg_program: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            armor: false,
            suffix: constants::ENCRYPTED_SUFFIX.to_string(),
            default_key: None,
            gpg_program: constants::GPG_PROGRAM.to_string(),
        }
    }
}

impl Settings {
    /// Settings file path under a keystore root.
    pub fn path(home: &Path) -> PathBuf {
        home.join(constants::SETTINGS_FILE)
    }

    /// Load settings from `<home>/config.toml`, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn load(home: &Path) -> Result<Self> {
        let path = Self::path(home);
        debug!(path = %path.display(), "loading settings");

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::file(&path, e)),
        };

        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        debug!(armor = settings.armor, suffix = %settings.suffix, "settings loaded");
        Ok(settings)
    }
}

/// Resolve the personal keystore root.
///
/// `$LOCKBOX_HOME` wins; otherwise `~/.lockbox`.
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir` if neither is available.
pub fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(constants::HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(constants::HOME_DIR))
}
