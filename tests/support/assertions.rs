//! Assertions over `lockbox` process output.

use std::process::Output;

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Exit 0, or panic with lockbox's error report.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "lockbox exited with {}:\n{}",
        output.status,
        stderr(output)
    );
}

/// Non-zero exit. Errors go to stderr, so stdout is shown on a surprise pass.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "lockbox unexpectedly succeeded:\n{}",
        stdout(output)
    );
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    let out = stdout(output);
    assert!(out.contains(needle), "no {:?} on stdout:\n{}", needle, out);
}

/// Warnings, hints and errors are all written to stderr.
pub fn assert_stderr_contains(output: &Output, needle: &str) {
    let err = stderr(output);
    assert!(err.contains(needle), "no {:?} on stderr:\n{}", needle, err);
}

pub fn assert_stdout_excludes(output: &Output, needle: &str) {
    let out = stdout(output);
    assert!(!out.contains(needle), "unexpected {:?} on stdout:\n{}", needle, out);
}

/// Keystore records, private keys and decrypted files carry owner-only modes.
#[cfg(unix)]
pub fn assert_mode(path: &std::path::Path, expected: u32) {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)
        .unwrap_or_else(|e| panic!("stat {}: {}", path.display(), e))
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(
        mode,
        expected,
        "{} is {:o}, want {:o}",
        path.display(),
        mode,
        expected
    );
}
