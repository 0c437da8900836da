mod pbkdf2_hmac_sha1;
mod pbkdf2_hmac_sha256;
mod pbkdf2_hmac_sha512;
