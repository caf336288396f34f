//! Interactive prompts.
//!
//! Every prompt refuses to run when stdin is not a terminal, so scripted use
//! fails fast instead of hanging. Escape and Ctrl-C cancel.

use std::io;

use dialoguer::{Confirm, Input, Select};

use crate::error::{Error, Result};

fn ensure_interactive(what: &str) -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        Ok(())
    } else {
        Err(Error::NotInteractive(what.to_string()))
    }
}

fn interaction(e: dialoguer::Error) -> Error {
    let dialoguer::Error::IO(e) = e;
    if e.kind() == io::ErrorKind::Interrupted {
        Error::Cancelled
    } else {
        Error::Io(e)
    }
}

/// Pick one of `options`; returns its index.
///
/// # Errors
///
/// Returns `Error::Cancelled` on Escape and `Error::NotInteractive` without a
/// terminal.
pub fn select_one(message: &str, options: &[String]) -> Result<usize> {
    ensure_interactive(message)?;
    Select::new()
        .with_prompt(message)
        .items(options)
        .default(0)
        .interact_opt()
        .map_err(interaction)?
        .ok_or(Error::Cancelled)
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(message: &str) -> Result<bool> {
    ensure_interactive(message)?;
    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact_opt()
        .map_err(interaction)?
        .ok_or(Error::Cancelled)
}

/// Read one line of text, trimmed. An empty answer takes `default`.
pub fn read_line(message: &str, default: Option<&str>) -> Result<String> {
    ensure_interactive(message)?;
    let mut input = Input::<String>::new().with_prompt(message);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let answer = input.interact_text().map_err(interaction)?;
    Ok(answer.trim().to_string())
}

/// Confirm unless `yes` was passed.
pub fn confirm_unless(yes: bool, message: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    confirm(message)
}
