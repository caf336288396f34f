//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An age public key string (starts with "age1...").
///
/// Used as an encryption target for a team member.
pub type PublicKey = String;

/// A team member or personal key name.
///
/// Identifies an identity in the roster or the personal keystore.
pub type MemberName = String;

/// An encrypted envelope (age v1 format, binary or armored).
pub type Envelope = Vec<u8>;
