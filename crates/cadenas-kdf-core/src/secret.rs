//! Secret-byte container for derived keys.
//!
//! Wraps [`SecretSlice<u8>`] from the `secrecy` crate so derived key material
//! is zeroized on drop and masked in `Debug`/`Display` output. Callers that
//! need an encoded form (hex, base64) encode from [`DerivedKey::expose`]
//! themselves; this crate never stringifies key bytes.

use secrecy::{ExposeSecret, SecretSlice};
use std::fmt;

/// Derived key bytes.
///
/// Zeroized on drop, masked in `Debug`/`Display` (`DerivedKey(***)`).
/// Intentionally no `PartialEq` — comparing a candidate against a stored key
/// goes through the constant-time [`crate::pbkdf2::verify`] instead.
pub struct DerivedKey {
    inner: SecretSlice<u8>,
}

impl DerivedKey {
    /// Take ownership of freshly derived bytes. The vector is moved into the
    /// secret wrapper, which zeroizes it on drop.
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: bytes.into(),
        }
    }

    /// Expose the raw key bytes. Use sparingly — prefer using the slice
    /// within a single expression rather than binding it long-lived.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    /// Number of bytes in the derived key.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.expose_secret().len()
    }

    /// Returns `true` for the degenerate zero-length derivation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(***)")
    }
}

impl fmt::Display for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(***)")
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
