//! Command context.
//!
//! Resolves the keystore home, settings, and (for repository commands) the
//! roster and membership file of the current repository.

use std::path::PathBuf;

use tracing::debug;

use crate::core::cipher::Age;
use crate::core::config::{self, Settings};
use crate::core::constants;
use crate::core::membership::Membership;
use crate::core::repo;
use crate::core::store::Filesystem;
use crate::core::team::Roster;
use crate::error::{ConfigError, Result};

/// Personal state shared by every command.
pub struct Context {
    pub home: PathBuf,
    pub settings: Settings,
    pub store: Filesystem,
}

impl Context {
    pub fn load() -> Result<Self> {
        let home = config::resolve_home()?;
        let settings = Settings::load(&home)?;
        debug!(home = %home.display(), "context loaded");
        Ok(Self {
            store: Filesystem::new(&home),
            home,
            settings,
        })
    }

    /// Envelope engine configured from settings.
    pub fn cipher(&self) -> Age {
        Age::with_armor(self.settings.armor)
    }
}

/// The current repository's lockbox files.
pub struct Repo {
    pub root: PathBuf,
    pub dir: PathBuf,
    pub roster: Roster,
    pub membership: Membership,
}

impl Repo {
    /// Locate the enclosing repository without requiring `init`.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = repo::find_root(&cwd)?;
        let dir = repo::lockbox_dir(&root);
        Ok(Self {
            roster: Roster::new(dir.join(constants::ROSTER_FILE)),
            membership: Membership::new(dir.join(constants::MEMBERSHIP_FILE)),
            root,
            dir,
        })
    }

    /// Locate the enclosing repository and require that it was initialized.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if `.lockbox` is missing.
    pub fn open() -> Result<Self> {
        let repo = Self::discover()?;
        if !repo.dir.is_dir() {
            return Err(ConfigError::NotInitialized(repo.root.display().to_string()).into());
        }
        Ok(repo)
    }

    pub fn is_initialized(&self) -> bool {
        self.dir.is_dir()
    }
}
