//! Tests for `lockbox secret encrypt/decrypt`.

use crate::support::*;

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let t = Test::with_member("alice");
    t.write(".env", SAMPLE_ENV);

    let output = t.encrypt(".env");
    assert_success(&output);
    assert_stdout_contains(&output, "1 member(s)");

    let sealed = std::fs::read(t.path(".env.encrypted")).unwrap();
    assert_ne!(sealed, SAMPLE_ENV);

    std::fs::remove_file(t.path(".env")).unwrap();
    assert_success(&t.decrypt(".env.encrypted", "alice"));
    assert_eq!(std::fs::read(t.path(".env")).unwrap(), SAMPLE_ENV);
}

#[test]
fn test_binary_file_roundtrip() {
    let t = Test::with_member("alice");
    let data = binary_payload();
    t.write("blob.bin", &data);

    assert_success(&t.encrypt("blob.bin"));
    let output = t
        .cmd()
        .args(["secret", "decrypt", "blob.bin.encrypted", "--key", "alice", "-o", "out.bin"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(std::fs::read(t.path("out.bin")).unwrap(), data);
}

#[test]
fn test_every_member_can_decrypt() {
    let t = Test::with_member("alice");
    t.key_add("bob");
    t.team_add_me("bob");
    t.write("secret.txt", b"shared");

    assert_success(&t.encrypt("secret.txt"));

    for (key, out) in [("alice", "a.txt"), ("bob", "b.txt")] {
        let output = t
            .cmd()
            .args(["secret", "decrypt", "secret.txt.encrypted", "--key", key, "-o", out])
            .output()
            .unwrap();
        assert_success(&output);
        assert_eq!(std::fs::read(t.path(out)).unwrap(), b"shared");
    }
}

#[test]
fn test_non_member_cannot_decrypt() {
    let t = Test::with_member("alice");
    t.key_add("mallory");
    t.write("secret.txt", b"members only");
    assert_success(&t.encrypt("secret.txt"));

    let output = t.decrypt("secret.txt.encrypted", "mallory");
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
    assert_eq!(std::fs::read(t.path("secret.txt")).unwrap(), b"members only");
}

#[test]
fn test_removed_member_excluded_from_new_files() {
    let t = Test::with_member("alice");
    t.key_add("bob");
    t.team_add_me("bob");
    let bob = t.roster().find_by_name("bob").unwrap().unwrap();
    assert_success(&t.team_remove_key(bob.public_key()));

    t.write("secret.txt", b"after removal");
    assert_success(&t.encrypt("secret.txt"));
    assert_failure(&t.decrypt("secret.txt.encrypted", "bob"));
}

#[test]
fn test_encrypt_with_empty_roster_fails() {
    let t = Test::init();
    t.write("secret.txt", b"nobody");

    let output = t.encrypt("secret.txt");
    assert_failure(&output);
    assert_stderr_contains(&output, "no recipients");
    assert!(!t.path("secret.txt.encrypted").exists());
}

#[test]
fn test_encrypt_needs_confirmation_without_yes() {
    let t = Test::with_member("alice");
    t.write("secret.txt", b"x");

    let output = t
        .cmd()
        .args(["secret", "encrypt", "secret.txt"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not a terminal");
}

#[test]
fn test_decrypt_uses_membership_key() {
    let t = Test::with_member("alice");
    t.key_use("alice");
    t.write("secret.txt", b"implicit key");
    assert_success(&t.encrypt("secret.txt"));
    std::fs::remove_file(t.path("secret.txt")).unwrap();

    let output = t
        .cmd()
        .args(["secret", "decrypt", "secret.txt.encrypted"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(std::fs::read(t.path("secret.txt")).unwrap(), b"implicit key");
}

#[test]
fn test_decrypt_uses_only_key() {
    let t = Test::with_member("alice");
    t.write("secret.txt", b"single key");
    assert_success(&t.encrypt("secret.txt"));

    let output = t
        .cmd()
        .args(["secret", "decrypt", "secret.txt.encrypted", "-o", "plain.txt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(std::fs::read(t.path("plain.txt")).unwrap(), b"single key");
}

#[test]
fn test_decrypt_without_suffix_appends_decrypted() {
    let t = Test::with_member("alice");
    t.write("secret.txt", b"renamed");
    assert_success(&t.encrypt("secret.txt"));
    std::fs::rename(t.path("secret.txt.encrypted"), t.path("blob.age")).unwrap();

    assert_success(&t.decrypt("blob.age", "alice"));
    assert_eq!(std::fs::read(t.path("blob.age.decrypted")).unwrap(), b"renamed");
}

#[test]
fn test_armor_setting() {
    let t = Test::with_member("alice");
    std::fs::write(t.home.path().join("config.toml"), "armor = true\n").unwrap();
    t.write("secret.txt", b"armored");

    assert_success(&t.encrypt("secret.txt"));
    let sealed = std::fs::read_to_string(t.path("secret.txt.encrypted")).unwrap();
    assert!(sealed.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));

    std::fs::remove_file(t.path("secret.txt")).unwrap();
    assert_success(&t.decrypt("secret.txt.encrypted", "alice"));
    assert_eq!(std::fs::read(t.path("secret.txt")).unwrap(), b"armored");
}

#[test]
fn test_custom_suffix_setting() {
    let t = Test::with_member("alice");
    std::fs::write(t.home.path().join("config.toml"), "suffix = \".age\"\n").unwrap();
    t.write("secret.txt", b"suffix");

    assert_success(&t.encrypt("secret.txt"));
    assert!(t.path("secret.txt.age").exists());
}

#[cfg(unix)]
#[test]
fn test_decrypted_file_is_private() {
    let t = Test::with_member("alice");
    t.write("secret.txt", b"private");
    assert_success(&t.encrypt("secret.txt"));
    std::fs::remove_file(t.path("secret.txt")).unwrap();

    assert_success(&t.decrypt("secret.txt.encrypted", "alice"));
    assert_mode(&t.path("secret.txt"), 0o600);
}
