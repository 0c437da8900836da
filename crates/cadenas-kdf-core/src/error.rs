//! Error types for `cadenas-kdf-core`.

use thiserror::Error;

/// Errors produced by key derivation and salt generation.
///
/// Every variant is a local precondition violation detected before or at the
/// start of computation. None of them are worth retrying: derivation is a
/// pure function, so the same inputs fail the same way. No partial output is
/// ever returned alongside an error.
#[derive(Debug, Error)]
pub enum KdfError {
    /// A caller-supplied value failed a precondition (salt size out of range,
    /// zero iteration count, empty salt handed to the engine).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested PRF name is not in the registry.
    #[error("unsupported PRF algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    /// The requested output length would need more blocks than the 32-bit
    /// block-index space allows.
    #[error("derived key too long: {requested} bytes exceeds the {max}-block index space")]
    DerivedKeyTooLong {
        /// Requested output length in bytes.
        requested: usize,
        /// Largest block count the block index can address.
        max: u64,
    },

    /// The secure random source failed to produce bytes.
    #[error("secure random source failed: {0}")]
    RandomSource(String),
}
