//! Personal key commands.

use serde::Serialize;
use tracing::info;

use crate::cli::context::{Context, Repo};
use crate::cli::{output, prompt};
use crate::core::domain::Identity;
use crate::core::store::Store;
use crate::error::{Result, StoreError};

#[derive(Serialize)]
struct KeyEntry<'a> {
    name: &'a str,
    public_key: &'a str,
    default: bool,
}

/// Create a new personal key.
pub fn add(name: Option<String>, use_here: bool) -> Result<()> {
    let ctx = Context::load()?;
    let name = match name {
        Some(name) => name,
        None => prompt::read_line("Key name", Some(&whoami::username()))?,
    };

    let identity = ctx.store.generate(&name)?;
    info!(key = %name, "created key");
    output::success(&format!("created key {}", output::key(&name)));
    output::kv("public key", identity.public_key());

    if use_here {
        let repo = Repo::open()?;
        repo.membership.save(&identity)?;
        output::success(&format!("{} is your key for this repository", output::key(&name)));
    }
    Ok(())
}

/// List personal keys.
pub fn list(json: bool) -> Result<()> {
    let ctx = Context::load()?;
    let keys = ctx.store.list()?;
    let default = ctx.settings.default_key.as_deref();

    if json {
        let entries: Vec<KeyEntry> = keys
            .iter()
            .map(|k| KeyEntry {
                name: k.name(),
                public_key: k.public_key(),
                default: Some(k.name()) == default,
            })
            .collect();
        output::data(&serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if keys.is_empty() {
        output::dimmed("no personal keys");
        output::hint("run: lockbox key add");
        return Ok(());
    }

    output::section("Keys");
    for k in &keys {
        let marker = if Some(k.name()) == default { " (default)" } else { "" };
        output::list_item(&format!(
            "{}{}  {}",
            output::key(k.name()),
            marker,
            k.public_key()
        ));
    }
    Ok(())
}

/// Delete a personal key.
///
/// If the current repository uses this key, its membership file is cleared
/// too.
pub fn remove(name: Option<String>, yes: bool) -> Result<()> {
    let ctx = Context::load()?;
    let name = match name {
        Some(name) => name,
        None => choose(&ctx.store.list()?, "Select a key to remove")?,
    };
    let identity = ctx.store.get(&name)?;

    if !prompt::confirm_unless(yes, &format!("Remove key '{}'? It cannot be recovered", name))? {
        output::dimmed("cancelled");
        return Ok(());
    }

    ctx.store.remove(&name)?;
    output::success(&format!("removed key {}", output::key(&name)));

    if let Ok(repo) = Repo::open() {
        if let Some(current) = repo.membership.load()? {
            if current.public_key() == identity.public_key() {
                repo.membership.clear()?;
                output::warn("this repository no longer has a key selected");
            }
        }
    }
    Ok(())
}

/// Make a personal key this repository's membership key.
pub fn use_key(name: Option<String>) -> Result<()> {
    let ctx = Context::load()?;
    let repo = Repo::open()?;
    let name = match name {
        Some(name) => name,
        None => choose(&ctx.store.list()?, "Select a key for this repository")?,
    };

    let identity = ctx.store.get(&name)?;
    repo.membership.save(&identity)?;
    output::success(&format!("{} is your key for this repository", output::key(&name)));
    Ok(())
}

/// Pick a key name from the keystore interactively.
pub(crate) fn choose(keys: &[Identity], message: &str) -> Result<String> {
    if keys.is_empty() {
        return Err(StoreError::NoKeys.into());
    }
    let names: Vec<String> = keys.iter().map(|k| k.name().to_string()).collect();
    let index = prompt::select_one(message, &names)?;
    Ok(names[index].clone())
}
