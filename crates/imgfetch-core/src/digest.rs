//! Content digests for session-scoped duplicate detection.
//!
//! SHA-256 over the full downloaded body, hex-encoded. The same hash also
//! seeds the numeric part of synthesized filenames so names are stable
//! across runs and platforms.

use sha2::{Digest, Sha256};

/// SHA-256 of `bytes` as lowercase hex.
pub fn content_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Small number in `0..modulus` derived from the URL string.
///
/// Used as a disambiguator in synthesized filenames; collisions are resolved
/// later by the storage layer, so this only needs to spread names out.
pub fn url_disambiguator(url: &str, modulus: u64) -> u64 {
    let digest = Sha256::digest(url.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix) % modulus.max(1)
}
