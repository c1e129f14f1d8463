//! Placeholder engines standing in for real Whisper/LLM integrations. They
//! sleep to simulate latency and return fixed text.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::time;

use super::{Summarizer, Transcriber};

#[derive(Debug, Clone)]
pub struct StubTranscriber {
    latency: Duration,
}

impl StubTranscriber {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StubTranscriber {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String> {
        time::sleep(self.latency).await;
        Ok("[transcript placeholder - speech-to-text not wired in yet]".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct StubSummarizer {
    latency: Duration,
}

impl StubSummarizer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StubSummarizer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, _transcript: &str) -> Result<String> {
        time::sleep(self.latency).await;
        Ok("[summary placeholder - generated from the transcript above]".to_string())
    }
}
