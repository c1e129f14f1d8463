pub mod stub;

pub use stub::{StubSummarizer, StubTranscriber};

use anyhow::Result;
use async_trait::async_trait;

/// Speech-to-text collaborator: raw audio bytes in, transcript out.
///
/// May be slow. Assumed to always eventually return; no streaming, no
/// partial results.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String>;
}

/// Summarization collaborator: transcript in, summary out. Same assumptions
/// as [`Transcriber`].
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<String>;
}
