//! Lockbox - share encrypted files with your team through git.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lockbox::cli::output;
use lockbox::cli::{execute, Cli};
use lockbox::error::{CipherError, ConfigError, Error, KeyringError, StoreError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("LOCKBOX_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("lockbox=debug")
        } else {
            EnvFilter::new("lockbox=warn")
        }
    });

    let json = std::env::var("LOCKBOX_LOG_FORMAT").is_ok_and(|v| v == "json");
    let (plain, structured) = if json {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time();
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(structured)
        .init();

    output::init();

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::NotInitialized(_)) => Some("run: lockbox init"),
        Error::Config(ConfigError::NotInRepository(_)) => Some("run lockbox inside a git repository"),
        Error::Store(StoreError::NoKeys) => Some("run: lockbox key add"),
        Error::Store(StoreError::NotFound(_)) => Some("run: lockbox key list"),
        Error::Cipher(CipherError::NoRecipients) => Some("run: lockbox team add --me <key>"),
        Error::Keyring(KeyringError::Unavailable(_)) => {
            Some("install GnuPG or set gpg_program in config.toml")
        }
        Error::NotInteractive(_) => Some("pass the value as a flag; see --help"),
        _ => None,
    }
}
