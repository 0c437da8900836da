//! RFC 6070 — PBKDF2-HMAC-SHA1 known-answer vectors.
//!
//! The 16,777,216-iteration vector is deliberately omitted; it adds minutes
//! of test time without exercising anything the 4096-iteration vectors miss.

use cadenas_kdf_core::{derive, PrfAlgorithm};

fn check(secret: &[u8], salt: &[u8], iterations: u32, expected_hex: &str) {
    let expected = hex::decode(expected_hex).expect("valid hex");
    let key = derive(
        secret,
        salt,
        iterations,
        expected.len(),
        PrfAlgorithm::HmacSha1,
    )
    .expect("derive should succeed");
    assert_eq!(
        key.expose(),
        expected,
        "RFC 6070 vector mismatch (c={iterations})"
    );
}

#[test]
fn rfc6070_case_1_single_iteration() {
    check(
        b"password",
        b"salt",
        1,
        "0c60c80f961f0e71f3a9b524af6012062fe037a6",
    );
}

#[test]
fn rfc6070_case_2_two_iterations() {
    check(
        b"password",
        b"salt",
        2,
        "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957",
    );
}

#[test]
fn rfc6070_case_3_4096_iterations() {
    check(
        b"password",
        b"salt",
        4096,
        "4b007901b765489abead49d926f721d065a429c1",
    );
}

/// 25-byte output forces a second block whose final 5 bytes are truncated —
/// the multi-block concatenate-then-truncate path.
#[test]
fn rfc6070_case_5_multi_block_truncated() {
    check(
        b"passwordPASSWORDpassword",
        b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        4096,
        "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038",
    );
}

/// Embedded NUL bytes in both secret and salt must pass through untouched.
#[test]
fn rfc6070_case_6_embedded_nul_bytes() {
    check(b"pass\0word", b"sa\0lt", 4096, "56fa6aa75548099dcc37d7f03425e0c3");
}
