//! External keyring commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::context::Context;
use crate::cli::{output, prompt};
use crate::core::files;
use crate::core::keyring::{Gpg, Keyring};
use crate::error::Result;

fn keyring() -> Result<Gpg> {
    let ctx = Context::load()?;
    Gpg::locate(&ctx.settings.gpg_program)
}

/// List keyring keys.
pub fn list(secret: bool) -> Result<()> {
    let gpg = keyring()?;
    let keys = gpg.list_keys(secret)?;

    if keys.is_empty() {
        output::dimmed("no keys in keyring");
        return Ok(());
    }

    output::section(if secret { "Secret keys" } else { "Keys" });
    for k in &keys {
        let uid = k.uids.first().map(String::as_str).unwrap_or("no user id");
        output::list_item(&format!("{}  {}", output::key(&k.id), uid));
    }
    Ok(())
}

/// Export a public key, to a file or stdout.
pub fn export(id: &str, out: Option<PathBuf>) -> Result<()> {
    let gpg = keyring()?;
    let armored = gpg.export(id)?;

    match out {
        Some(path) => {
            files::write(&path, &armored)?;
            output::success(&format!("exported {} to {}", id, output::path(path.display())));
        }
        None => std::io::stdout().write_all(&armored)?,
    }
    Ok(())
}

/// Import key material from a file.
pub fn import(file: &Path) -> Result<()> {
    let gpg = keyring()?;
    let material = files::read(file)?;
    gpg.import(&material)?;
    output::success(&format!("imported {}", output::path(file.display())));
    Ok(())
}

/// Delete a key from the keyring.
pub fn delete(id: &str, yes: bool) -> Result<()> {
    let gpg = keyring()?;
    if !prompt::confirm_unless(yes, &format!("Delete '{}' from the {} keyring?", id, gpg.name()))? {
        output::dimmed("cancelled");
        return Ok(());
    }
    gpg.delete(id)?;
    output::success(&format!("deleted {}", id));
    Ok(())
}
