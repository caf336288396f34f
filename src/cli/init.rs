//! Init command - set up `.lockbox` in the current repository.

use tracing::info;

use crate::cli::context::Repo;
use crate::cli::output;
use crate::core::{files, membership};
use crate::error::{ConfigError, Error, Result};

/// Create `.lockbox/` with an empty roster and a `.gitignore` that keeps the
/// membership key out of version control.
pub fn execute() -> Result<()> {
    let repo = Repo::discover()?;

    if repo.is_initialized() {
        return Err(ConfigError::AlreadyInitialized(repo.root.display().to_string()).into());
    }

    std::fs::create_dir_all(&repo.dir).map_err(|e| Error::file(&repo.dir, e))?;
    membership::ensure_gitignore(&repo.dir)?;
    files::write(repo.roster.path(), b"")?;

    info!(dir = %repo.dir.display(), "initialized");
    output::success(&format!("initialized {}", output::path(repo.dir.display())));
    output::hint("add yourself: lockbox team add --me <key>");
    Ok(())
}
