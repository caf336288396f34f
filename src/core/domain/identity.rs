//! Identity type.
//!
//! A named age public key, optionally paired with its private counterpart.
//! Private key material is zeroed on drop and never shown by `Debug`.

use zeroize::Zeroizing;

use crate::core::types::{MemberName, PublicKey};

/// A named keypair or public-key-only record.
///
/// Identities read from the team roster never carry a private key; those read
/// from the personal keystore always do.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    name: MemberName,
    public_key: PublicKey,
    private_key: Option<Zeroizing<String>>,
}

impl Identity {
    /// Create a public-key-only identity.
    pub fn public(name: impl Into<MemberName>, public_key: impl Into<PublicKey>) -> Self {
        Self {
            name: name.into(),
            public_key: public_key.into(),
            private_key: None,
        }
    }

    /// Create an identity holding both halves of a keypair.
    pub fn keypair(
        name: impl Into<MemberName>,
        public_key: impl Into<PublicKey>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            public_key: public_key.into(),
            private_key: Some(Zeroizing::new(private_key.into())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The private key (`AGE-SECRET-KEY-1...`), if this identity carries one.
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_ref().map(|k| k.as_str())
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Copy of this identity without the private key.
    pub fn to_public(&self) -> Self {
        Self::public(self.name.clone(), self.public_key.clone())
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("name", &self.name)
            .field("public_key", &self.public_key)
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
