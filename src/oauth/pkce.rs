//! PKCE verifier/challenge and `state` generation.

use crate::error::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Characters allowed in a code verifier (RFC 7636 section 4.1).
const UNRESERVED: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const MIN_VERIFIER_LEN: usize = 43;
pub const MAX_VERIFIER_LEN: usize = 128;
pub const STATE_LEN: usize = 30;

/// Challenge method sent with the authorization request.
pub const CHALLENGE_METHOD: &str = "S256";

/// Generate a code verifier of `len` unreserved characters.
pub fn generate_code_verifier(len: usize) -> Result<String> {
    if !(MIN_VERIFIER_LEN..=MAX_VERIFIER_LEN).contains(&len) {
        return Err(Error::invalid_input(format!(
            "code verifier length must be {MIN_VERIFIER_LEN}-{MAX_VERIFIER_LEN}, got {len}"
        )));
    }
    Ok(random_string(UNRESERVED, len))
}

/// Check a caller-supplied verifier against RFC 7636.
pub fn validate_code_verifier(verifier: &str) -> Result<()> {
    let len = verifier.len();
    if !(MIN_VERIFIER_LEN..=MAX_VERIFIER_LEN).contains(&len) {
        return Err(Error::invalid_input(format!(
            "code verifier must be {MIN_VERIFIER_LEN}-{MAX_VERIFIER_LEN} characters, got {len}"
        )));
    }
    if !verifier.bytes().all(|b| UNRESERVED.contains(&b)) {
        return Err(Error::invalid_input(
            "code verifier may only contain A-Z, a-z, 0-9, '-', '.', '_' and '~'",
        ));
    }
    Ok(())
}

/// BASE64URL(SHA256(verifier)) without padding.
pub fn code_challenge_s256(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

/// Opaque anti-CSRF token for one authorization request.
pub fn generate_state() -> String {
    random_string(ALPHANUMERIC, STATE_LEN)
}

fn random_string(charset: &[u8], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}
