//! Core library components.
//!
//! Everything that does not talk to a terminal: the envelope engine, the
//! personal keystore, the team roster, and the file plumbing around them.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod constants;
pub mod domain;
pub mod files;
pub mod keyring;
pub mod membership;
pub mod repo;
pub mod store;
pub mod team;
pub mod transform;
pub mod types;
pub mod validation;
