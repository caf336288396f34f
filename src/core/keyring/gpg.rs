//! GnuPG keyring backend.
//!
//! Drives the `gpg` CLI in batch mode. Listings use the machine-readable
//! `--with-colons` format.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::{debug, trace};

use super::{Keyring, KeyringKey};
use crate::error::{KeyringError, Result};

/// GnuPG keyring driven through its command line
#[derive(Debug, Clone)]
pub struct Gpg {
    program: PathBuf,
    homedir: Option<PathBuf>,
}

impl Gpg {
    /// Use an explicit program path and optional `--homedir`.
    pub fn new(program: impl Into<PathBuf>, homedir: Option<PathBuf>) -> Self {
        Self {
            program: program.into(),
            homedir,
        }
    }

    /// Find `program` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `KeyringError::Unavailable` if it is not installed.
    pub fn locate(program: &str) -> Result<Self> {
        let path =
            which::which(program).map_err(|_| KeyringError::Unavailable(program.to_string()))?;
        debug!(program = %path.display(), "located keyring program");
        Ok(Self::new(path, None))
    }

    /// Point at a non-default GnuPG home directory.
    pub fn with_homedir(mut self, homedir: impl Into<PathBuf>) -> Self {
        self.homedir = Some(homedir.into());
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--batch");
        if let Some(homedir) = &self.homedir {
            cmd.arg("--homedir").arg(homedir);
        }
        cmd
    }

    fn run(&self, args: &[&str], stdin: Option<&[u8]>) -> Result<Vec<u8>> {
        let label = format!("gpg {}", args.join(" "));
        trace!(command = %label, "running keyring command");

        let mut cmd = self.command();
        cmd.args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| KeyringError::CommandFailed {
            command: label.clone(),
            stderr: e.to_string(),
        })?;

        if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
            pipe.write_all(input)
                .map_err(|e| KeyringError::CommandFailed {
                    command: label.clone(),
                    stderr: e.to_string(),
                })?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| KeyringError::CommandFailed {
                command: label.clone(),
                stderr: e.to_string(),
            })?;
        check(&label, output)
    }

    fn resolve(&self, id: &str, include_private: bool) -> Result<KeyringKey> {
        self.list_keys(include_private)?
            .into_iter()
            .find(|key| key.matches(id))
            .ok_or_else(|| KeyringError::NotFound(id.to_string()).into())
    }
}

fn check(label: &str, output: Output) -> Result<Vec<u8>> {
    if output.status.success() {
        return Ok(output.stdout);
    }
    Err(KeyringError::CommandFailed {
        command: label.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
    .into())
}

impl Keyring for Gpg {
    fn list_keys(&self, include_private: bool) -> Result<Vec<KeyringKey>> {
        let listing = if include_private {
            "--list-secret-keys"
        } else {
            "--list-keys"
        };
        let stdout = self.run(&["--with-colons", "--fixed-list-mode", listing], None)?;
        let keys = parse_colons(&String::from_utf8_lossy(&stdout));
        debug!(count = keys.len(), secret = include_private, "listed keyring");
        Ok(keys)
    }

    fn export(&self, id: &str) -> Result<Vec<u8>> {
        let key = self.resolve(id, false)?;
        let armored = self.run(&["--armor", "--export", &key.fingerprint], None)?;
        if armored.is_empty() {
            return Err(KeyringError::NotFound(id.to_string()).into());
        }
        Ok(armored)
    }

    fn import(&self, material: &[u8]) -> Result<()> {
        self.run(&["--import"], Some(material))?;
        debug!(bytes = material.len(), "imported into keyring");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let key = self.resolve(id, false)?;
        let has_secret = self
            .list_keys(true)?
            .iter()
            .any(|secret| secret.fingerprint == key.fingerprint);

        let action = if has_secret {
            "--delete-secret-and-public-key"
        } else {
            "--delete-keys"
        };
        self.run(&["--yes", action, &key.fingerprint], None)?;
        debug!(fingerprint = %key.fingerprint, secret = has_secret, "deleted from keyring");
        Ok(())
    }

    fn name(&self) -> &str {
        "gpg"
    }
}

/// Parse a `gpg --with-colons` key listing.
///
/// Each `pub`/`sec` record starts a key. The first `fpr` record after it is
/// the primary fingerprint; subkey fingerprints are ignored. `uid` records
/// attach to the current key.
pub fn parse_colons(listing: &str) -> Vec<KeyringKey> {
    let mut keys = Vec::new();
    let mut current: Option<KeyringKey> = None;
    let mut in_subkey = false;

    for line in listing.lines() {
        let fields: Vec<&str> = line.split(':').collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or_default();

        match field(0) {
            "pub" | "sec" => {
                keys.extend(current.take());
                current = Some(KeyringKey {
                    id: field(4).to_string(),
                    fingerprint: String::new(),
                    uids: Vec::new(),
                });
                in_subkey = false;
            }
            "sub" | "ssb" => in_subkey = true,
            "fpr" if !in_subkey => {
                if let Some(key) = current.as_mut().filter(|k| k.fingerprint.is_empty()) {
                    key.fingerprint = field(9).to_string();
                }
            }
            "uid" => {
                if let Some(key) = current.as_mut() {
                    key.uids.push(unescape(field(9)));
                }
            }
            _ => {}
        }
    }
    keys.extend(current);
    keys
}

// Colon listings escape ':' and other specials as \xNN.
fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut rest = field;
    while let Some(pos) = rest.find("\\x") {
        out.push_str(&rest[..pos]);
        let hex = rest.get(pos + 2..pos + 4);
        match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
            Some(byte) => {
                out.push(char::from(byte));
                rest = &rest[pos + 4..];
            }
            None => {
                out.push_str("\\x");
                rest = &rest[pos + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}
