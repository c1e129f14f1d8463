use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-derived identity key for the transcript/summary cache.
///
/// Identical byte content (or an identical URL string) always digests to the
/// identical fingerprint; distinct content collides only with negligible
/// probability. Rendered as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint of raw audio bytes (uploaded file).
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(data)))
    }

    /// Fingerprint of a source URL, keyed on its UTF-8 encoding.
    pub fn of_url(url: &str) -> Self {
        Self::of_bytes(url.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
