//! Whole-file encryption and decryption.
//!
//! Reads the input file, runs it through the engine, writes the output file.
//! Files are small secrets, so nothing is streamed. A crash mid-write can
//! leave a truncated output that must be discarded.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::cipher::Cipher;
use crate::core::constants;
use crate::core::domain::Identity;
use crate::core::files;
use crate::core::store::Store;
use crate::core::team::Roster;
use crate::error::{FormatError, Result};

/// Encrypt `input` for every member of the roster and write the envelope to `output`.
///
/// Returns the roster members the file was encrypted for.
///
/// # Errors
///
/// Returns `Error::File` on I/O failure and propagates engine errors
/// (`CipherError::NoRecipients` for an empty roster).
pub fn encrypt_file(
    cipher: &impl Cipher,
    roster: &Roster,
    input: &Path,
    output: &Path,
) -> Result<Vec<Identity>> {
    let members = roster.list()?;
    let recipients: Vec<_> = members
        .iter()
        .map(|member| member.public_key().to_string())
        .collect();

    let plaintext = zeroize::Zeroizing::new(files::read(input)?);
    let envelope = cipher.seal(&plaintext, &recipients)?;
    files::write(output, &envelope)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        recipients = members.len(),
        "encrypted file"
    );
    Ok(members)
}

/// Decrypt `input` with the personal key `key_name` and write the plaintext to `output`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` for an unknown key, `Error::File` on I/O
/// failure, and propagates engine errors.
pub fn decrypt_file(
    cipher: &impl Cipher,
    store: &dyn Store,
    input: &Path,
    output: &Path,
    key_name: &str,
) -> Result<()> {
    let identity = store.get(key_name)?;
    decrypt_file_with(cipher, &identity, input, output)
}

/// Decrypt `input` with an identity already in hand.
///
/// The plaintext is written readable by the owner only.
pub fn decrypt_file_with(
    cipher: &impl Cipher,
    identity: &Identity,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let private_key = identity
        .private_key()
        .ok_or_else(|| FormatError::MissingPrivateKey(identity.name().to_string()))?;

    let envelope = files::read(input)?;
    let plaintext = zeroize::Zeroizing::new(cipher.open(&envelope, private_key)?);
    files::write_private(output, &plaintext)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        key = %identity.name(),
        "decrypted file"
    );
    Ok(())
}

/// Default output path for encrypting `input`: `input` + `suffix`.
pub fn default_encrypted_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Default output path for decrypting `input`.
///
/// Strips `suffix` when present, otherwise appends `.decrypted`.
pub fn default_decrypted_path(input: &Path, suffix: &str) -> PathBuf {
    let text = input.to_string_lossy();
    match text.strip_suffix(suffix) {
        Some(stripped) if !suffix.is_empty() && !stripped.is_empty() => {
            debug!(suffix = %suffix, "stripping encrypted suffix");
            PathBuf::from(stripped)
        }
        _ => {
            let mut name = input.as_os_str().to_os_string();
            name.push(constants::DECRYPTED_SUFFIX);
            PathBuf::from(name)
        }
    }
}
