//! PRF adapter — keyed HMAC variants used as the PBKDF2 mixing primitive.
//!
//! [`PrfAlgorithm`] is the registry of supported PRFs; [`PrfKey`] is one of
//! them keyed with a caller's secret, ready to be invoked once per PBKDF2
//! iteration. Keying absorbs the secret exactly once per derivation — each
//! invocation clones the pre-keyed HMAC state instead of re-absorbing the
//! secret, which matters when a derivation performs millions of invocations.

use crate::error::KdfError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

/// Supported PRF algorithms: HMAC over the named hash.
///
/// The serialized form (and [`PrfAlgorithm::name`]) uses the registry names
/// the configuration layer resolves, so the algorithm identifier can be
/// persisted next to a derived key and looked up again at verification time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrfAlgorithm {
    /// HMAC-SHA-1, 20-byte blocks. Kept for interoperability with existing
    /// PBKDF2 deployments and the RFC 6070 vectors; prefer SHA-256 or
    /// SHA-512 when deriving new keys.
    HmacSha1,
    /// HMAC-SHA-256, 32-byte blocks. The default.
    HmacSha256,
    /// HMAC-SHA-512, 64-byte blocks.
    HmacSha512,
}

impl PrfAlgorithm {
    /// Look up an algorithm by its registry name.
    ///
    /// Accepts `"HMACSHA1"`, `"HMACSHA256"` and `"HMACSHA512"`,
    /// ASCII-case-insensitively and tolerating `-`/`_` separators
    /// (`"HMAC-SHA256"` and `"hmacsha256"` both resolve).
    ///
    /// # Errors
    ///
    /// Returns `KdfError::UnsupportedAlgorithm` for any other name.
    pub fn from_name(name: &str) -> Result<Self, KdfError> {
        let canonical: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match canonical.as_str() {
            "HMACSHA1" => Ok(Self::HmacSha1),
            "HMACSHA256" => Ok(Self::HmacSha256),
            "HMACSHA512" => Ok(Self::HmacSha512),
            _ => Err(KdfError::UnsupportedAlgorithm(name.to_owned())),
        }
    }

    /// Canonical registry name, suitable for persisting alongside a derived
    /// key. Round-trips through [`PrfAlgorithm::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HmacSha1 => "HMACSHA1",
            Self::HmacSha256 => "HMACSHA256",
            Self::HmacSha512 => "HMACSHA512",
        }
    }

    /// PRF output block size in bytes (`hLen` in RFC 8018).
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::HmacSha1 => 20,
            Self::HmacSha256 => 32,
            Self::HmacSha512 => 64,
        }
    }
}

/// A PRF keyed with a derivation secret.
///
/// Holds the HMAC state with the key already absorbed. [`PrfKey::digest`]
/// clones that state per message; no state is mutated between invocations,
/// so a single `PrfKey` serves every block and iteration of one derivation.
pub(crate) enum PrfKey {
    HmacSha1(Hmac<Sha1>),
    HmacSha256(Hmac<Sha256>),
    HmacSha512(Hmac<Sha512>),
}

impl PrfKey {
    /// Key `algorithm` with `secret`.
    ///
    /// HMAC accepts keys of any length (long keys are hashed down), so the
    /// underlying `InvalidLength` cannot occur in practice — but the `Mac`
    /// API surfaces it, so it is propagated rather than swallowed.
    pub(crate) fn new(algorithm: PrfAlgorithm, secret: &[u8]) -> Result<Self, KdfError> {
        let keying = |e: hmac::digest::InvalidLength| {
            KdfError::InvalidArgument(format!("PRF keying failed: {e}"))
        };
        match algorithm {
            PrfAlgorithm::HmacSha1 => Hmac::<Sha1>::new_from_slice(secret)
                .map(Self::HmacSha1)
                .map_err(keying),
            PrfAlgorithm::HmacSha256 => Hmac::<Sha256>::new_from_slice(secret)
                .map(Self::HmacSha256)
                .map_err(keying),
            PrfAlgorithm::HmacSha512 => Hmac::<Sha512>::new_from_slice(secret)
                .map(Self::HmacSha512)
                .map_err(keying),
        }
    }

    /// Compute `PRF(secret, message)`. Returns exactly `hLen` bytes for the
    /// keyed algorithm.
    pub(crate) fn digest(&self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::HmacSha1(mac) => {
                let mut mac = mac.clone();
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Self::HmacSha256(mac) => {
                let mut mac = mac.clone();
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Self::HmacSha512(mac) => {
                let mut mac = mac.clone();
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
