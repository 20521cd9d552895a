//! Content digests over canonical JSON.
//!
//! Two values with the same canonical JSON always share a digest, which makes
//! digests a cheap way to compare whole universes across builds or tools.

use anyhow::Result;
use serde::Serialize;

use crate::canonical_json;

/// Hex-encoded blake3 digest of `value`'s canonical JSON.
pub fn json_digest<T: Serialize>(value: &T) -> Result<String> {
    let json = canonical_json(value)?;
    Ok(blake3::hash(json.as_bytes()).to_hex().to_string())
}

/// Short (first 16 hex chars) form of [`json_digest`] for logs and listings.
pub fn short_digest<T: Serialize>(value: &T) -> Result<String> {
    let mut digest = json_digest(value)?;
    digest.truncate(16);
    Ok(digest)
}
