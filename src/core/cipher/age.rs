//! Age encryption backend implementation.
//!
//! Envelopes are age v1 files: one X25519 stanza per recipient wrapping a
//! fresh file key, then the payload encrypted once with that key. Output is
//! binary by default and ASCII-armored when requested; `open` accepts both.

use std::io::{Read, Write};

use ::age::secrecy::ExposeSecret;
use ::age::x25519;
use tracing::trace;

use super::Cipher;
use crate::core::domain::Identity;
use crate::core::types::{Envelope, PublicKey};
use crate::error::{CipherError, Result};

/// Age-based cryptographic backend using x25519 keys
#[derive(Debug, Clone, Copy, Default)]
pub struct Age {
    armor: bool,
}

impl Age {
    /// Backend producing ASCII-armored envelopes.
    pub fn armored() -> Self {
        Self { armor: true }
    }

    /// Backend producing armored envelopes when `armor` is set, binary otherwise.
    pub fn with_armor(armor: bool) -> Self {
        Self { armor }
    }

    fn format(&self) -> age::armor::Format {
        if self.armor {
            age::armor::Format::AsciiArmor
        } else {
            age::armor::Format::Binary
        }
    }
}

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn seal(&self, plaintext: &[u8], recipients: &[PublicKey]) -> Result<Envelope> {
        if recipients.is_empty() {
            return Err(CipherError::NoRecipients.into());
        }

        let parsed = recipients
            .iter()
            .map(|key| parse_recipient(key))
            .collect::<Result<Vec<_>>>()?;

        trace!(
            recipients = parsed.len(),
            plaintext_len = plaintext.len(),
            armor = self.armor,
            "sealing"
        );

        let encryptor =
            age::Encryptor::with_recipients(parsed.iter().map(|r| r as &dyn age::Recipient))
                .map_err(|e| CipherError::Encryption(format!("{}", e)))?;

        let mut sealed = Vec::new();
        let armored = age::armor::ArmoredWriter::wrap_output(&mut sealed, self.format())
            .map_err(|e| CipherError::Encryption(format!("{}", e)))?;
        let mut writer = encryptor
            .wrap_output(armored)
            .map_err(|e| CipherError::Encryption(format!("{}", e)))?;

        writer
            .write_all(plaintext)
            .map_err(|e| CipherError::Encryption(format!("{}", e)))?;
        writer
            .finish()
            .and_then(|armored| armored.finish())
            .map_err(|e| CipherError::Encryption(format!("{}", e)))?;

        trace!(envelope_len = sealed.len(), "sealed");

        Ok(sealed)
    }

    fn open(&self, envelope: &[u8], private_key: &str) -> Result<Vec<u8>> {
        let identity = parse_identity(private_key)?;

        trace!(envelope_len = envelope.len(), "opening");

        let reader = age::armor::ArmoredReader::new(envelope);
        let decryptor = age::Decryptor::new(reader).map_err(decryption_error)?;

        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(decryption_error)?;

        // Payload chunks are authenticated as they are read; on failure the
        // partial buffer is dropped with the error.
        let mut opened = Vec::new();
        reader
            .read_to_end(&mut opened)
            .map_err(|e| CipherError::Decryption(format!("{}", e)))?;

        trace!(plaintext_len = opened.len(), "opened");

        Ok(opened)
    }
}

fn decryption_error(e: age::DecryptError) -> crate::error::Error {
    match e {
        age::DecryptError::NoMatchingKeys => {
            CipherError::Decryption("the envelope is not addressed to this key".to_string())
                .into()
        }
        other => CipherError::Decryption(format!("{}", other)).into(),
    }
}

/// Parse a public key string into an age recipient
///
/// # Errors
///
/// Returns `CipherError::InvalidRecipient` naming the key if the format is invalid.
pub fn parse_recipient(key: &str) -> Result<x25519::Recipient> {
    key.parse::<x25519::Recipient>()
        .map_err(|_| CipherError::InvalidRecipient(key.to_string()).into())
}

/// Parse a private key string into an age identity.
///
/// The key itself is never included in the error.
///
/// # Errors
///
/// Returns `CipherError::InvalidKey` if the format is invalid.
pub fn parse_identity(private_key: &str) -> Result<x25519::Identity> {
    private_key
        .trim()
        .parse::<x25519::Identity>()
        .map_err(|e: &str| CipherError::InvalidKey(e.to_string()).into())
}

/// Derive the public key that matches a private key.
pub fn public_key_of(private_key: &str) -> Result<PublicKey> {
    Ok(parse_identity(private_key)?.to_public().to_string())
}

/// Generate a fresh X25519 keypair bound to `name`.
pub fn generate_identity(name: &str) -> Identity {
    let inner = x25519::Identity::generate();
    let public_key = inner.to_public().to_string();
    let secret = inner.to_string();
    Identity::keypair(name, public_key, secret.expose_secret())
}
