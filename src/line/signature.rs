//! LINE webhook signature verification using HMAC-SHA256.
//!
//! LINE signs the raw request body with HMAC-SHA256 keyed by the channel
//! secret and sends the base64-encoded digest in the `x-line-signature`
//! header. Verification happens before any parsing of the body.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 digest of a body using the channel secret.
///
/// Exposed so tests can generate valid signature headers.
pub fn compute_signature(body: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(body);
    mac.finalize().into_bytes().to_vec()
}

/// Encodes a digest as a `x-line-signature` header value (base64).
pub fn encode_signature(signature: &[u8]) -> String {
    BASE64.encode(signature)
}

/// Verifies a LINE webhook signature against the raw body and secret.
///
/// Returns `false` for malformed headers; never panics. Uses the HMAC
/// library's constant-time comparison.
pub fn verify_signature(body: &[u8], signature_header: &str, secret: &[u8]) -> bool {
    let expected = match BASE64.decode(signature_header) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}
