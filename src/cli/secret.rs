//! Encrypt and decrypt commands.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::context::{Context, Repo};
use crate::cli::key::choose;
use crate::cli::{output, prompt};
use crate::core::domain::Identity;
use crate::core::store::Store;
use crate::core::transform;
use crate::error::Result;

fn input_path(input: Option<PathBuf>, message: &str) -> Result<PathBuf> {
    match input {
        Some(path) => Ok(path),
        None => Ok(PathBuf::from(prompt::read_line(message, None)?)),
    }
}

/// Encrypt a file for every roster member.
pub fn encrypt(input: Option<PathBuf>, output: Option<PathBuf>, yes: bool) -> Result<()> {
    let ctx = Context::load()?;
    let repo = Repo::open()?;

    let input = input_path(input, "File to encrypt")?;
    let target = output
        .unwrap_or_else(|| transform::default_encrypted_path(&input, &ctx.settings.suffix));

    let members = repo.roster.list()?;
    if !members.is_empty() {
        output::section("Recipients");
        for m in &members {
            output::list_item(m.name());
        }
        println!();
    }

    if !members.is_empty() && !prompt::confirm_unless(yes, "Encrypt for these members?")? {
        output::dimmed("cancelled");
        return Ok(());
    }

    let sealed_for = transform::encrypt_file(&ctx.cipher(), &repo.roster, &input, &target)?;
    output::success(&format!(
        "encrypted {} -> {} for {} member(s)",
        output::path(input.display()),
        output::path(target.display()),
        sealed_for.len()
    ));
    Ok(())
}

/// Decrypt a file with one of your keys.
pub fn decrypt(input: Option<PathBuf>, output: Option<PathBuf>, key: Option<String>) -> Result<()> {
    let ctx = Context::load()?;

    let input = input_path(input, "File to decrypt")?;
    let target = output
        .unwrap_or_else(|| transform::default_decrypted_path(&input, &ctx.settings.suffix));

    let identity = select_identity(&ctx, key)?;
    debug!(key = %identity.name(), "decrypting with");

    transform::decrypt_file_with(&ctx.cipher(), &identity, &input, &target)?;
    output::success(&format!(
        "decrypted {} -> {}",
        output::path(input.display()),
        output::path(target.display())
    ));
    Ok(())
}

/// Decryption key: `--key`, else the repository's membership key, else the
/// configured default, else ask.
fn select_identity(ctx: &Context, key: Option<String>) -> Result<Identity> {
    if let Some(name) = key {
        return ctx.store.get(&name);
    }

    if let Ok(repo) = Repo::open() {
        if let Some(identity) = repo.membership.load()? {
            debug!("using repository membership key");
            return Ok(identity);
        }
    }

    if let Some(name) = &ctx.settings.default_key {
        return ctx.store.get(name);
    }

    let keys = ctx.store.list()?;
    if let [only] = keys.as_slice() {
        return Ok(only.clone());
    }
    let name = choose(&keys, "Select key to decrypt with")?;
    ctx.store.get(&name)
}
