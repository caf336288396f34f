//! Constants used throughout lockbox.
//!
//! Centralizes magic strings and configuration values.

/// Repository-local lockbox directory (`<repo>/.lockbox`).
pub const LOCKBOX_DIR: &str = ".lockbox";

/// Team roster file inside the lockbox directory.
pub const ROSTER_FILE: &str = "keys.txt";

/// Membership identity file inside the lockbox directory.
pub const MEMBERSHIP_FILE: &str = "private.key";

/// Personal keystore directory relative to HOME (`~/.lockbox`).
pub const HOME_DIR: &str = ".lockbox";

/// Environment variable overriding the personal keystore root.
pub const HOME_ENV: &str = "LOCKBOX_HOME";

/// Subdirectory of the keystore root holding one record per key.
pub const KEYS_DIR: &str = "keys";

/// Extension of personal key records.
pub const RECORD_EXT: &str = "json";

/// User settings file inside the keystore root.
pub const SETTINGS_FILE: &str = "config.toml";

/// Default suffix for encrypted files.
pub const ENCRYPTED_SUFFIX: &str = ".encrypted";

/// Suffix used when decrypting a file that lacks the encrypted suffix.
pub const DECRYPTED_SUFFIX: &str = ".decrypted";

/// Default keyring bridge program.
pub const GPG_PROGRAM: &str = "gpg";

/// Gitignore entries that keep the membership key out of version control.
pub const GITIGNORE_ENTRIES: &[&str] = &[MEMBERSHIP_FILE];
