//! Resolved derivation settings.
//!
//! The host application resolves `{hash name, iteration count, salt size}`
//! from wherever its configuration lives and hands the engine this immutable
//! struct — there is no settings file parsing and no cached singleton inside
//! the cryptographic core. Validation is a set of plain stateless range
//! checks; the engine repeats its own defensive checks regardless, so it
//! stays safe to call standalone.

use crate::error::KdfError;
use crate::prf::PrfAlgorithm;
use crate::salt::{MAX_SALT_LEN, MIN_SALT_LEN};
use serde::{Deserialize, Serialize};

/// Default PRF registry name.
pub const DEFAULT_HASH_NAME: &str = "HMACSHA256";

/// Default iteration count. A floor, not a recommendation — hosts should
/// raise it as far as their latency budget allows.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default salt size in bytes.
pub const DEFAULT_SALT_SIZE: usize = 8;

/// Resolved PBKDF2 settings.
///
/// Serde-deserializable so hosts that keep these in a config file can map
/// their section straight onto it; missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfSettings {
    /// PRF registry name, e.g. `"HMACSHA256"`.
    pub hash_name: String,
    /// Work factor: PRF applications per output block.
    pub iterations: u32,
    /// Salt size in bytes handed to the salt generator.
    pub salt_size: usize,
}

impl Default for KdfSettings {
    fn default() -> Self {
        Self {
            hash_name: DEFAULT_HASH_NAME.to_owned(),
            iterations: DEFAULT_ITERATIONS,
            salt_size: DEFAULT_SALT_SIZE,
        }
    }
}

impl KdfSettings {
    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: `KdfError::InvalidArgument` for an
    /// empty hash name, a zero iteration count or an out-of-range salt size,
    /// `KdfError::UnsupportedAlgorithm` for an unregistered hash name.
    pub fn validate(&self) -> Result<(), KdfError> {
        validate_hash_name(&self.hash_name)?;
        validate_iterations(self.iterations)?;
        validate_salt_size(self.salt_size)
    }

    /// Resolve the configured hash name against the PRF registry.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::UnsupportedAlgorithm` if the name is not registered.
    pub fn algorithm(&self) -> Result<PrfAlgorithm, KdfError> {
        PrfAlgorithm::from_name(&self.hash_name)
    }
}

/// The hash name must be non-empty and present in the PRF registry.
///
/// # Errors
///
/// `KdfError::InvalidArgument` when empty, `KdfError::UnsupportedAlgorithm`
/// when unregistered.
pub fn validate_hash_name(name: &str) -> Result<(), KdfError> {
    if name.is_empty() {
        return Err(KdfError::InvalidArgument(
            "hash name must not be empty".into(),
        ));
    }
    PrfAlgorithm::from_name(name).map(|_| ())
}

/// The iteration count must be at least 1. No upper bound — cost versus
/// security is the caller's trade to make.
///
/// # Errors
///
/// `KdfError::InvalidArgument` when zero.
pub fn validate_iterations(iterations: u32) -> Result<(), KdfError> {
    if iterations == 0 {
        return Err(KdfError::InvalidArgument(
            "iteration count must be at least 1".into(),
        ));
    }
    Ok(())
}

/// The salt size must lie within `[MIN_SALT_LEN, MAX_SALT_LEN]`.
///
/// # Errors
///
/// `KdfError::InvalidArgument` when out of range.
pub fn validate_salt_size(size: usize) -> Result<(), KdfError> {
    if size < MIN_SALT_LEN {
        return Err(KdfError::InvalidArgument(format!(
            "salt size {size} below minimum {MIN_SALT_LEN}"
        )));
    }
    if size > MAX_SALT_LEN {
        return Err(KdfError::InvalidArgument(format!(
            "salt size {size} above maximum {MAX_SALT_LEN}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
