//! Team roster commands.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::cli::context::{Context, Repo};
use crate::cli::key::choose;
use crate::cli::{output, prompt};
use crate::core::domain::Identity;
use crate::core::store::Store;
use crate::core::{codec, files};
use crate::error::{Result, ValidationError};

#[derive(Serialize)]
struct MemberEntry<'a> {
    name: &'a str,
    public_key: &'a str,
}

/// Add members to the roster.
///
/// Sources, in order of precedence: one of your own keys (`--me`), a file of
/// roster records or a bare key (`--file`), an explicit `--name`/`--key`
/// pair. With none of them, you pick one of your own keys.
pub fn add(
    me: Option<String>,
    name: Option<String>,
    key: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let ctx = Context::load()?;
    let repo = Repo::open()?;

    let members = if let Some(me) = me {
        vec![ctx.store.get(&me)?.to_public()]
    } else if let Some(file) = file {
        read_members(&file, name)?
    } else if let Some(name) = name {
        let public_key = match key {
            Some(key) => key,
            None => prompt::read_line(&format!("Public key for {}", name), None)?,
        };
        vec![Identity::public(name, public_key)]
    } else {
        let keys = ctx.store.list()?;
        let chosen = choose(&keys, "Select one of your keys to add")?;
        vec![ctx.store.get(&chosen)?.to_public()]
    };

    let existing = repo.roster.list()?;
    for member in &members {
        if existing
            .iter()
            .any(|m| m.public_key() == member.public_key())
        {
            output::warn(&format!(
                "{} is already in the roster, adding it again",
                output::key(member.name())
            ));
        }
    }

    repo.roster.append_all(&members)?;
    for member in &members {
        info!(member = %member.name(), "member added");
        output::success(&format!("added {} to the team", output::key(member.name())));
    }
    Ok(())
}

/// Roster records from a file, or a single bare public key named `name`.
fn read_members(path: &Path, name: Option<String>) -> Result<Vec<Identity>> {
    let bytes = files::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let trimmed = text.trim();

    if !trimmed.is_empty() && !trimmed.contains('#') && trimmed.lines().count() == 1 {
        let name = match name {
            Some(name) => name,
            None => prompt::read_line("Member name", None)?,
        };
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        return Ok(vec![Identity::public(name, trimmed)]);
    }

    codec::decode_roster(&text)
}

/// List roster members.
pub fn list(json: bool) -> Result<()> {
    let repo = Repo::open()?;
    let members = repo.roster.list()?;

    if json {
        let entries: Vec<MemberEntry> = members
            .iter()
            .map(|m| MemberEntry {
                name: m.name(),
                public_key: m.public_key(),
            })
            .collect();
        output::data(&serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if members.is_empty() {
        output::dimmed("no team members");
        output::hint("run: lockbox team add --me <key>");
        return Ok(());
    }

    let mine = repo.membership.load()?;
    output::section("Team");
    for m in &members {
        let marker = match &mine {
            Some(me) if me.public_key() == m.public_key() => " (you)",
            _ => "",
        };
        output::list_item(&format!(
            "{}{}  {}",
            output::key(m.name()),
            marker,
            m.public_key()
        ));
    }
    Ok(())
}

/// Remove a member from the roster.
///
/// Files already encrypted for the member stay readable by them until they
/// are re-encrypted.
pub fn remove(key: Option<String>, name: Option<String>, yes: bool) -> Result<()> {
    let repo = Repo::open()?;
    let members = repo.roster.list()?;

    let target = if let Some(key) = &key {
        members.into_iter().find(|m| m.public_key() == key.as_str())
    } else if let Some(name) = name {
        members.into_iter().find(|m| m.name() == name)
    } else {
        if members.is_empty() {
            output::dimmed("no team members");
            return Ok(());
        }
        let labels: Vec<String> = members
            .iter()
            .map(|m| format!("{} ({})", m.name(), m.public_key()))
            .collect();
        let index = prompt::select_one("Select a member to remove", &labels)?;
        members.into_iter().nth(index)
    };

    let Some(member) = target else {
        output::warn("no matching roster entry");
        return Ok(());
    };

    if !prompt::confirm_unless(
        yes,
        &format!("Remove {} from the team?", member.name()),
    )? {
        output::dimmed("cancelled");
        return Ok(());
    }

    match key {
        Some(key) => repo.roster.remove(&key)?,
        None => repo.roster.remove_member(&member)?,
    };
    info!(member = %member.name(), "member removed");
    output::success(&format!("removed {} from the team", output::key(member.name())));
    output::hint("re-encrypt shared files to revoke access to them");
    Ok(())
}
