//! Salt generation backed by an injectable secure random source.
//!
//! The random source is an explicit capability passed by the caller rather
//! than a lazily-initialized process-wide singleton: the composition root
//! constructs one [`OsSecureRandom`] (or a deterministic fake in tests) and
//! threads it through. Salts are not secret — they are persisted next to the
//! derived key so the same key can be re-derived for verification — but they
//! must be unpredictable, hence the CSPRNG requirement.

use crate::error::KdfError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Minimum salt size in bytes. Anything shorter gives precomputation
/// (rainbow-table) attacks traction.
pub const MIN_SALT_LEN: usize = 8;

/// Maximum salt size in bytes accepted by the configuration range.
pub const MAX_SALT_LEN: usize = 65536;

/// A cryptographically secure byte source.
///
/// Production code uses [`OsSecureRandom`]; tests substitute a deterministic
/// fake to make salt-dependent flows reproducible.
pub trait SecureRandomSource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::RandomSource` if the underlying source fails.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), KdfError>;
}

/// The operating system CSPRNG.
///
/// Zero-sized and stateless on our side; `OsRng` is safe for concurrent use,
/// so no locking or one-time initialization is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSecureRandom;

impl SecureRandomSource for OsSecureRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), KdfError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| KdfError::RandomSource(format!("CSPRNG fill failed: {e}")))
    }
}

/// Generate a random salt of exactly `size` bytes from `source`.
///
/// # Errors
///
/// Returns `KdfError::InvalidArgument` if `size` is below [`MIN_SALT_LEN`]
/// or above [`MAX_SALT_LEN`], and `KdfError::RandomSource` if the source
/// fails. No partially filled salt is ever returned.
pub fn generate_salt(
    source: &mut dyn SecureRandomSource,
    size: usize,
) -> Result<Vec<u8>, KdfError> {
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

    let mut salt = vec![0u8; size];
    source.fill_bytes(&mut salt)?;
    Ok(salt)
}

/// Generate a random salt from the operating system CSPRNG.
///
/// Convenience over [`generate_salt`] with [`OsSecureRandom`].
///
/// # Errors
///
/// Same conditions as [`generate_salt`].
pub fn generate_salt_os(size: usize) -> Result<Vec<u8>, KdfError> {
    generate_salt(&mut OsSecureRandom, size)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
