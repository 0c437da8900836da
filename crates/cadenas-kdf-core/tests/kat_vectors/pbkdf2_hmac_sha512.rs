//! PBKDF2-HMAC-SHA512 known-answer vector.
//!
//! Single cross-checked vector pinning the 64-byte block size path.

use cadenas_kdf_core::{derive, PrfAlgorithm};

#[test]
fn password_salt_one_iteration() {
    let expected = hex::decode(
        "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
         c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce",
    )
    .expect("valid hex");
    let key = derive(b"password", b"salt", 1, 64, PrfAlgorithm::HmacSha512)
        .expect("derive should succeed");
    assert_eq!(key.expose(), expected);
}
