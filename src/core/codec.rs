//! Text encodings for identities.
//!
//! Two formats live here:
//!
//! - the roster format, an ordered list of named public keys:
//!
//!   ```text
//!   # alice
//!   age1...
//!   # bob
//!   age1...
//!   ```
//!
//! - the identity record, a single JSON object holding a name and both halves
//!   of a keypair, used by the personal keystore and the membership file.
//!
//! Roster decoding is lenient about whitespace (blank lines, CRLF, a missing
//! final newline, `#name` without a space) but strict about structure: every
//! name line must be followed by exactly one key line. Encoding is canonical,
//! so decode → encode → decode always yields the same records.

use serde::{Deserialize, Serialize};

use crate::core::domain::Identity;
use crate::error::{FormatError, Result};

/// Encode identities as roster text.
///
/// Only names and public keys are written; private keys are never part of
/// the roster format.
pub fn encode_roster(identities: &[Identity]) -> String {
    let mut out = String::new();
    for identity in identities {
        out.push_str(&encode_roster_entry(identity));
    }
    out
}

/// Encode a single roster record (`# <name>\n<public_key>\n`).
pub fn encode_roster_entry(identity: &Identity) -> String {
    format!("# {}\n{}\n", identity.name(), identity.public_key())
}

/// Decode roster text into public-key-only identities, in file order.
///
/// # Errors
///
/// Returns `FormatError` naming the 1-based line of the first structural
/// problem: a key with no name, a name with no key, or an empty name.
pub fn decode_roster(text: &str) -> Result<Vec<Identity>> {
    let mut identities = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('#') {
            if let Some((line, name)) = pending.take() {
                return Err(FormatError::MissingKey { line, name }.into());
            }
            let name = rest.trim();
            if name.is_empty() {
                return Err(FormatError::EmptyName { line: line_no }.into());
            }
            pending = Some((line_no, name.to_string()));
        } else {
            match pending.take() {
                Some((_, name)) => identities.push(Identity::public(name, line)),
                None => return Err(FormatError::OrphanKey { line: line_no }.into()),
            }
        }
    }

    if let Some((line, name)) = pending {
        return Err(FormatError::MissingKey { line, name }.into());
    }

    Ok(identities)
}

/// On-disk identity record.
///
/// PascalCase field names are the `private.key` file format.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Record<'a> {
    name: &'a str,
    public_key: &'a str,
    private_key: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OwnedRecord {
    name: String,
    public_key: String,
    #[serde(default)]
    private_key: String,
}

/// Encode an identity, private key included, as a JSON record.
///
/// # Errors
///
/// Returns `FormatError::MissingPrivateKey` for a public-only identity.
pub fn encode_record(identity: &Identity) -> Result<String> {
    let private_key = identity
        .private_key()
        .ok_or_else(|| FormatError::MissingPrivateKey(identity.name().to_string()))?;

    let record = Record {
        name: identity.name(),
        public_key: identity.public_key(),
        private_key,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Decode a JSON identity record.
///
/// # Errors
///
/// Returns `FormatError::Record` if the JSON is malformed or a field is empty.
pub fn decode_record(text: &str) -> Result<Identity> {
    let mut record: OwnedRecord =
        serde_json::from_str(text).map_err(|e| FormatError::Record(e.to_string()))?;

    let identity = if record.name.trim().is_empty() {
        Err(FormatError::Record("empty name".to_string()))
    } else if record.public_key.trim().is_empty() {
        Err(FormatError::Record(format!("'{}' has no public key", record.name)))
    } else if record.private_key.trim().is_empty() {
        Err(FormatError::MissingPrivateKey(record.name.clone()))
    } else {
        Ok(Identity::keypair(
            record.name.clone(),
            record.public_key.trim(),
            record.private_key.trim(),
        ))
    };

    zeroize::Zeroize::zeroize(&mut record.private_key);
    Ok(identity?)
}
