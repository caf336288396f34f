//! Input validation for lockbox operations.
//!
//! Validates member names, keystore names, and key file permissions.

use std::path::Path;

use crate::error::{Result, ValidationError};

/// Validate a team member name.
///
/// Member names end up on a `# <name>` line of the roster, so they must be
/// non-empty, cannot contain line breaks or other control characters, and
/// cannot carry surrounding whitespace the roster would not keep.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_member_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if let Some(ch) = name.chars().find(|c| c.is_control()) {
        return Err(ValidationError::InvalidName {
            name: name.escape_default().to_string(),
            reason: format!("control character {:?} is not allowed", ch),
        }
        .into());
    }

    if name != name.trim() {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "leading or trailing whitespace is not allowed".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate a personal key name.
///
/// Key names become file names in the keystore, so on top of the member name
/// rules they cannot contain path separators or start with a dot.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_key_name(name: &str) -> Result<()> {
    validate_member_name(name)?;

    if name.contains(['/', '\\']) {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "path separators are not allowed".to_string(),
        }
        .into());
    }

    if name.starts_with('.') {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "cannot start with '.'".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate file permissions (Unix only).
///
/// Checks that a file has the expected permissions mode.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPermissions` on a mismatch.
#[cfg(unix)]
pub fn validate_file_permissions(path: &Path, expected_mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|e| crate::error::Error::file(path, e))?;
    let actual_mode = metadata.permissions().mode() & 0o777;

    if actual_mode != expected_mode {
        return Err(ValidationError::InvalidPermissions {
            path: path.display().to_string(),
            expected: format!("{:o}", expected_mode),
            actual: format!("{:o}", actual_mode),
        }
        .into());
    }

    Ok(())
}

#[cfg(not(unix))]
pub fn validate_file_permissions(_path: &Path, _expected_mode: u32) -> Result<()> {
    Ok(())
}
