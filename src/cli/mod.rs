//! Command-line interface.

pub mod completions;
pub mod context;
pub mod init;
pub mod key;
pub mod keyring;
pub mod output;
pub mod prompt;
pub mod secret;
pub mod team;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lockbox - share encrypted files with your team through git.
#[derive(Parser)]
#[command(
    name = "lockbox",
    about = "Share encrypted files with your team through git",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize lockbox in the current git repository
    Init,

    /// Manage your personal keys
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Manage the repository's team roster
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Encrypt and decrypt files
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Move keys in and out of the external keyring
    Keyring {
        #[command(subcommand)]
        action: KeyringAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Personal key subcommands.
#[derive(Subcommand)]
pub enum KeyAction {
    /// Create a new personal key
    Add {
        /// Key name (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// Also make it your key for this repository
        #[arg(long = "use")]
        use_here: bool,
    },

    /// List personal keys
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a personal key
    Remove {
        /// Key name (selected interactively if omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Choose which personal key this repository uses
    Use {
        /// Key name (selected interactively if omitted)
        #[arg(short, long)]
        name: Option<String>,
    },
}

/// Roster subcommands.
#[derive(Subcommand)]
pub enum TeamAction {
    /// Add a member to the roster
    Add {
        /// Add one of your own keys by name
        #[arg(long, value_name = "KEY", conflicts_with_all = ["key", "file"])]
        me: Option<String>,
        /// Member name
        #[arg(short, long)]
        name: Option<String>,
        /// Member's age public key
        #[arg(short, long, requires = "name", conflicts_with = "file")]
        key: Option<String>,
        /// Read roster records (or a bare public key) from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List roster members
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a member from the roster
    Remove {
        /// Public key to remove
        #[arg(short, long, conflicts_with = "name")]
        key: Option<String>,
        /// Member name to remove
        #[arg(short, long)]
        name: Option<String>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// File subcommands.
#[derive(Subcommand)]
pub enum SecretAction {
    /// Encrypt a file for every roster member
    Encrypt {
        /// File to encrypt (prompted if omitted)
        input: Option<PathBuf>,
        /// Output path (defaults to INPUT plus the encrypted suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Decrypt a file with one of your keys
    Decrypt {
        /// File to decrypt (prompted if omitted)
        input: Option<PathBuf>,
        /// Output path (defaults to INPUT without the encrypted suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Personal key to decrypt with
        #[arg(short, long)]
        key: Option<String>,
    },
}

/// External keyring subcommands.
#[derive(Subcommand)]
pub enum KeyringAction {
    /// List keyring keys
    List {
        /// Only keys with secret material
        #[arg(long)]
        secret: bool,
    },

    /// Export a public key in armored form
    Export {
        /// Key id, fingerprint, or user id
        id: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import key material from a file
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Delete a key from the keyring
    Delete {
        /// Key id, fingerprint, or user id
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init => init::execute(),
        Key { action } => match action {
            KeyAction::Add { name, use_here } => key::add(name, use_here),
            KeyAction::List { json } => key::list(json),
            KeyAction::Remove { name, yes } => key::remove(name, yes),
            KeyAction::Use { name } => key::use_key(name),
        },
        Team { action } => match action {
            TeamAction::Add {
                me,
                name,
                key,
                file,
            } => team::add(me, name, key, file),
            TeamAction::List { json } => team::list(json),
            TeamAction::Remove { key, name, yes } => team::remove(key, name, yes),
        },
        Secret { action } => match action {
            SecretAction::Encrypt { input, output, yes } => secret::encrypt(input, output, yes),
            SecretAction::Decrypt { input, output, key } => secret::decrypt(input, output, key),
        },
        Keyring { action } => match action {
            KeyringAction::List { secret } => keyring::list(secret),
            KeyringAction::Export { id, output } => keyring::export(&id, output),
            KeyringAction::Import { file } => keyring::import(&file),
            KeyringAction::Delete { id, yes } => keyring::delete(&id, yes),
        },
        Completions { shell } => completions::execute(shell),
    }
}
