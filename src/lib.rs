//! Lockbox - file encryption for teams that share a git repository.
//!
//! Each member holds personal age keypairs in a keystore under their home
//! directory. A repository lists its members' public keys in a committed
//! roster, and files are encrypted so that any one member can decrypt them.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Set up .lockbox in a repository
//! │   ├── key           # Personal keypairs
//! │   ├── team          # Roster membership
//! │   ├── secret        # Encrypt/decrypt files
//! │   ├── keyring       # External keyring bridge
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # Envelope engine
//!     │   ├── mod       # Cipher trait
//!     │   └── age       # age implementation
//!     ├── store/        # Personal keystore
//!     │   ├── mod       # Store trait
//!     │   └── fs        # One JSON record per key
//!     ├── keyring/      # External keyring (GnuPG)
//!     ├── codec         # Roster and record formats
//!     ├── team          # Roster file
//!     ├── membership    # Per-repository key designation
//!     ├── transform     # Whole-file encrypt/decrypt
//!     └── config        # Settings and home resolution
//! ```
//!
//! # Example
//!
//! ```no_run
//! use lockbox::core::cipher::{self, Age, Cipher};
//!
//! let alice = cipher::generate_identity("alice");
//! let envelope = Age::default()
//!     .seal(b"hello", &[alice.public_key().to_string()])
//!     .unwrap();
//! let plaintext = Age::default()
//!     .open(&envelope, alice.private_key().unwrap())
//!     .unwrap();
//! assert_eq!(plaintext, b"hello");
//! ```

pub mod cli;
pub mod core;
pub mod error;
