use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One memoized transcription/summarization result, keyed by the content
/// fingerprint of the audio it was computed from. Survives sessions and
/// process restarts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub fingerprint: String,
    pub transcript: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}
