//! PBKDF2-HMAC-SHA256 known-answer vectors.
//!
//! The 64-byte vectors are RFC 7914 §11; the 32- and 40-byte vectors are the
//! widely cross-checked SHA-256 counterparts of the RFC 6070 inputs.

use cadenas_kdf_core::{derive, PrfAlgorithm};

fn check(secret: &[u8], salt: &[u8], iterations: u32, expected_hex: &str) {
    let expected = hex::decode(expected_hex).expect("valid hex");
    let key = derive(
        secret,
        salt,
        iterations,
        expected.len(),
        PrfAlgorithm::HmacSha256,
    )
    .expect("derive should succeed");
    assert_eq!(
        key.expose(),
        expected,
        "PBKDF2-HMAC-SHA256 vector mismatch (c={iterations})"
    );
}

#[test]
fn rfc7914_passwd_salt_one_iteration() {
    check(
        b"passwd",
        b"salt",
        1,
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
         49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
    );
}

#[test]
fn rfc7914_password_nacl_80000_iterations() {
    check(
        b"Password",
        b"NaCl",
        80000,
        "4ddcd8f60b98be21830cee5ef22701f9641a4418d04c0414aeff08876b34ab56\
         a1d425a1225833549adb841b51c9b3176a272bdebba1d078478f62b397f33c8d",
    );
}

#[test]
fn password_salt_one_iteration() {
    check(
        b"password",
        b"salt",
        1,
        "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b",
    );
}

#[test]
fn password_salt_two_iterations() {
    check(
        b"password",
        b"salt",
        2,
        "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43",
    );
}

#[test]
fn password_salt_4096_iterations() {
    check(
        b"password",
        b"salt",
        4096,
        "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a",
    );
}

/// 40-byte output: one full block plus a truncated second block.
#[test]
fn long_inputs_4096_iterations_multi_block() {
    check(
        b"passwordPASSWORDpassword",
        b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        4096,
        "348c89dbcbd32b2f32d814b8116e84cf2b17347ebc1800181c4e2a1fb8dd53e1c635518c7dac47e9",
    );
}
