//! `cadenas-kdf-core` — PBKDF2 password-based key derivation for CADENAS.
//!
//! This crate is the audit target: zero network, zero async, no configuration
//! file parsing. The host resolves settings and owns the random source; the
//! derivation engine is a pure function of its inputs.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;
pub mod pbkdf2;
pub mod prf;
pub mod salt;
pub mod secret;

pub use config::{
    KdfSettings, DEFAULT_HASH_NAME, DEFAULT_ITERATIONS, DEFAULT_SALT_SIZE,
};
pub use error::KdfError;
pub use pbkdf2::{derive, verify, Pbkdf2};
pub use prf::PrfAlgorithm;
pub use salt::{
    generate_salt, generate_salt_os, OsSecureRandom, SecureRandomSource, MAX_SALT_LEN,
    MIN_SALT_LEN,
};
pub use secret::DerivedKey;
