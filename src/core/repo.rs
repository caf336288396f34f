//! Repository root discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Walk up from `start` to the nearest directory containing `.git`.
///
/// `.git` may be a directory or a file (worktrees and submodules).
///
/// # Errors
///
/// Returns `ConfigError::NotInRepository` if no ancestor has one.
pub fn find_root(start: &Path) -> Result<PathBuf> {
    let found = start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf);

    match found {
        Some(root) => {
            debug!(root = %root.display(), "found repository root");
            Ok(root)
        }
        None => Err(ConfigError::NotInRepository(start.display().to_string()).into()),
    }
}

/// The lockbox directory of a repository (`<root>/.lockbox`).
pub fn lockbox_dir(root: &Path) -> PathBuf {
    root.join(constants::LOCKBOX_DIR)
}
