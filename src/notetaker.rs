use std::sync::Arc;

use log::info;
use serde::Serialize;

use crate::{
    db::Database,
    engines::{Summarizer, Transcriber},
    error::NoteError,
    source::AudioSource,
};

/// The transcript/summary pair the host displays, plus whether it came out
/// of the cache or was computed on this call.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notes {
    pub transcript: String,
    pub summary: String,
    pub from_cache: bool,
}

/// Get-or-compute front of the transcript/summary cache.
///
/// Looks the source up by fingerprint and only pays for the engines on a
/// miss, writing the result back so the cost is paid once per unique
/// content, however many sessions or reruns ask for it.
pub struct NoteTaker {
    db: Database,
    transcriber: Arc<dyn Transcriber>,
    summarizer: Arc<dyn Summarizer>,
}

impl NoteTaker {
    pub fn new(
        db: Database,
        transcriber: Arc<dyn Transcriber>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            db,
            transcriber,
            summarizer,
        }
    }

    /// Produce the notes for the loaded source.
    ///
    /// Remote URL sources are served from the cache when possible but
    /// cannot be transcribed locally; a miss on one is
    /// [`NoteError::UnsupportedSource`]. A partially failed write is never
    /// reported as success.
    pub async fn notes_for(&self, source: Option<&AudioSource>) -> Result<Notes, NoteError> {
        let source = source.ok_or(NoteError::MissingSource)?;
        let fingerprint = source.fingerprint();

        if let Some(entry) = self
            .db
            .get_cached(&fingerprint)
            .await
            .map_err(NoteError::Storage)?
        {
            info!("cache hit for {fingerprint}");
            return Ok(Notes {
                transcript: entry.transcript,
                summary: entry.summary,
                from_cache: true,
            });
        }

        let bytes = match source {
            AudioSource::Upload { bytes } => bytes,
            AudioSource::Remote { .. } => return Err(NoteError::UnsupportedSource),
        };

        info!("cache miss for {fingerprint}, running engines");
        let transcript = self
            .transcriber
            .transcribe(bytes)
            .await
            .map_err(NoteError::Engine)?;
        let summary = self
            .summarizer
            .summarize(&transcript)
            .await
            .map_err(NoteError::Engine)?;

        self.db
            .put_cached(&fingerprint, &transcript, &summary)
            .await
            .map_err(NoteError::Storage)?;

        Ok(Notes {
            transcript,
            summary,
            from_cache: false,
        })
    }
}
