//! PBKDF2 derivation engine (RFC 8018 §5.2).
//!
//! This module provides:
//! - [`derive`] — the block-construction algorithm itself
//! - [`verify`] — constant-time re-derive-and-compare
//! - [`Pbkdf2`] — a deriver bound to validated [`KdfSettings`]
//!
//! The engine is a pure function of its inputs: no internal randomness, no
//! state carried between calls. The cost — `iterations × blocks` PRF
//! invocations — is the security feature, so nothing here short-circuits it.

use crate::config::KdfSettings;
use crate::error::KdfError;
use crate::prf::{PrfAlgorithm, PrfKey};
use crate::salt::{self, SecureRandomSource};
use crate::secret::DerivedKey;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Largest block count the 32-bit block index can address
/// (RFC 8018 §5.2 step 1: `dkLen ≤ (2^32 − 1) × hLen`).
#[allow(clippy::cast_lossless)]
const MAX_BLOCKS: u64 = u32::MAX as u64;

/// Derive `output_len` bytes of key material from `secret` and `salt`.
///
/// Implements RFC 8018 §5.2: the output is split into `hLen`-byte blocks,
/// block `i` being the XOR-fold of the iteration chain seeded with
/// `PRF(secret, salt ‖ INT(i))` where `INT(i)` is the 1-based block index as
/// four big-endian bytes — big-endian on every platform, since the encoding
/// is part of the wire-level format shared with other PBKDF2 implementations.
/// The final block is truncated when `output_len` is not a multiple of
/// `hLen`.
///
/// Determinism: two calls with identical inputs produce byte-identical
/// output. Salt randomness is the only entropy in the construction and it is
/// supplied by the caller, not generated here.
///
/// A zero `output_len` is degenerate but valid and yields an empty key.
///
/// # Errors
///
/// - `KdfError::InvalidArgument` — `iterations` is zero or `salt` is empty.
///   Callers should further hold salts to the configured minimum
///   ([`crate::salt::MIN_SALT_LEN`]); the engine itself only insists on
///   non-emptiness so externally sourced salts can be re-derived.
/// - `KdfError::DerivedKeyTooLong` — `output_len` would need more than
///   2^32 − 1 blocks. Unreachable for sane lengths, but checked rather than
///   silently truncated.
pub fn derive(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
    algorithm: PrfAlgorithm,
) -> Result<DerivedKey, KdfError> {
    if iterations == 0 {
        return Err(KdfError::InvalidArgument(
            "iteration count must be at least 1".into(),
        ));
    }
    if salt.is_empty() {
        return Err(KdfError::InvalidArgument("salt must not be empty".into()));
    }
    if output_len == 0 {
        return Ok(DerivedKey::new(Vec::new()));
    }

    let h_len = algorithm.output_len();
    let num_blocks = output_len.div_ceil(h_len);
    if u64::try_from(num_blocks).map_or(true, |n| n > MAX_BLOCKS) {
        return Err(KdfError::DerivedKeyTooLong {
            requested: output_len,
            max: MAX_BLOCKS,
        });
    }

    // Key the PRF once; every block and iteration reuses the keyed state.
    let prf = PrfKey::new(algorithm, secret)?;

    let mut output = vec![0u8; output_len];
    // (1u32..) cannot overflow: num_blocks ≤ u32::MAX is checked above.
    for (block_index, chunk) in (1u32..).zip(output.chunks_mut(h_len)) {
        let mut block = derive_block(&prf, salt, iterations, block_index);
        // The last chunk may be shorter than hLen; truncate, never pad.
        chunk.copy_from_slice(&block[..chunk.len()]);
        block.zeroize();
    }

    Ok(DerivedKey::new(output))
}

/// Compute one output block `T_i` (RFC 8018 §5.2 step 3).
///
/// `U_1 = PRF(secret, salt ‖ INT(i))`, `U_j = PRF(secret, U_{j−1})`,
/// `T_i = U_1 ⊕ U_2 ⊕ … ⊕ U_c`. With `iterations == 1` the fold degenerates
/// to `U_1`.
fn derive_block(prf: &PrfKey, salt: &[u8], iterations: u32, block_index: u32) -> Vec<u8> {
    let mut seed = Vec::with_capacity(salt.len().saturating_add(4));
    seed.extend_from_slice(salt);
    seed.extend_from_slice(&block_index.to_be_bytes());

    let mut u = prf.digest(&seed);
    let mut t = u.clone();
    for _ in 1..iterations {
        let next = prf.digest(&u);
        u.zeroize();
        u = next;
        for (t_byte, u_byte) in t.iter_mut().zip(&u) {
            *t_byte ^= u_byte;
        }
    }
    u.zeroize();
    t
}

/// Re-derive a key from `secret` and compare it against `expected` in
/// constant time.
///
/// The expected key's length fixes the derivation length, so a stored
/// credential record (salt, iteration count, algorithm name, key) is all a
/// verification workflow needs.
///
/// # Errors
///
/// Same conditions as [`derive`].
pub fn verify(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    algorithm: PrfAlgorithm,
    expected: &[u8],
) -> Result<bool, KdfError> {
    let candidate = derive(secret, salt, iterations, expected.len(), algorithm)?;
    Ok(bool::from(candidate.expose().ct_eq(expected)))
}

// ---------------------------------------------------------------------------
// Settings-bound deriver
// ---------------------------------------------------------------------------

/// A deriver bound to validated settings.
///
/// Hosts that resolve a [`KdfSettings`] once at startup construct one of
/// these and pass it around; it holds no mutable state and is safe to share
/// across threads.
#[derive(Clone, Debug)]
pub struct Pbkdf2 {
    algorithm: PrfAlgorithm,
    iterations: u32,
    salt_size: usize,
}

impl Pbkdf2 {
    /// Bind a deriver to `settings`, validating them first.
    ///
    /// # Errors
    ///
    /// Propagates whatever [`KdfSettings::validate`] rejects.
    pub fn new(settings: &KdfSettings) -> Result<Self, KdfError> {
        settings.validate()?;
        Ok(Self {
            algorithm: settings.algorithm()?,
            iterations: settings.iterations,
            salt_size: settings.salt_size,
        })
    }

    /// The bound PRF algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> PrfAlgorithm {
        self.algorithm
    }

    /// The bound iteration count.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// The bound salt size in bytes.
    #[must_use]
    pub const fn salt_size(&self) -> usize {
        self.salt_size
    }

    /// Derive `output_len` bytes using the bound algorithm and iteration
    /// count.
    ///
    /// # Errors
    ///
    /// Same conditions as the free [`derive`].
    pub fn derive(
        &self,
        secret: &[u8],
        salt: &[u8],
        output_len: usize,
    ) -> Result<DerivedKey, KdfError> {
        derive(secret, salt, self.iterations, output_len, self.algorithm)
    }

    /// Verify `secret` against a previously derived key, constant-time.
    ///
    /// # Errors
    ///
    /// Same conditions as the free [`derive`].
    pub fn verify(&self, secret: &[u8], salt: &[u8], expected: &[u8]) -> Result<bool, KdfError> {
        verify(secret, salt, self.iterations, self.algorithm, expected)
    }

    /// Generate a salt of the bound size from `source`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`crate::salt::generate_salt`].
    pub fn generate_salt(
        &self,
        source: &mut dyn SecureRandomSource,
    ) -> Result<Vec<u8>, KdfError> {
        salt::generate_salt(source, self.salt_size)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
