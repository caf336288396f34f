//! Error types for lockbox.
//!
//! Every fallible operation returns [`Result`]. Domain failures are grouped
//! into sub-enums that convert into [`Error`] with `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Keyring(#[from] KeyringError),

    #[error("cancelled")]
    Cancelled,

    #[error("cannot prompt for {0}: stdin is not a terminal")]
    NotInteractive(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attach a path to an I/O failure.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

/// Roster and identity-record parse failures.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("line {line}: public key without a preceding '# <name>' line")]
    OrphanKey { line: usize },

    #[error("line {line}: member '{name}' has no public key")]
    MissingKey { line: usize, name: String },

    #[error("line {line}: empty member name")]
    EmptyName { line: usize },

    #[error("identity '{0}' has no private key")]
    MissingPrivateKey(String),

    #[error("malformed identity record: {0}")]
    Record(String),
}

/// Personal keystore failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no key named '{0}'")]
    NotFound(String),

    #[error("a key named '{0}' already exists")]
    DuplicateName(String),

    #[error("no personal keys")]
    NoKeys,

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Encryption engine failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("no recipients to encrypt for")]
    NoRecipients,

    #[error("invalid recipient public key: {0}")]
    InvalidRecipient(String),

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("encryption failed: {0}")]
    Encryption(String),
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("insecure permissions on {path}: expected {expected}, found {actual}")]
    InvalidPermissions {
        path: String,
        expected: String,
        actual: String,
    },
}

/// Repository and settings failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not inside a git repository: {0}")]
    NotInRepository(String),

    #[error("lockbox is not initialized in {0}")]
    NotInitialized(String),

    #[error("lockbox is already initialized in {0}")]
    AlreadyInitialized(String),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// External keyring program failures.
#[derive(Error, Debug)]
pub enum KeyringError {
    #[error("keyring program '{0}' not found on PATH")]
    Unavailable(String),

    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("no keyring entry matches '{0}'")]
    NotFound(String),
}

/// Result alias used throughout lockbox.
pub type Result<T> = std::result::Result<T, Error>;
