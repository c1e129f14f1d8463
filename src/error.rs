use thiserror::Error;

/// Failures surfaced to the interactive host.
///
/// `Storage` and `Engine` carry their underlying context chain and are fatal
/// for the triggering action. The remaining variants are conditions the host
/// handles by blocking the action and telling the user what is missing.
/// Nothing here is retried internally; a retry is the user pressing the same
/// button again.
#[derive(Debug, Error)]
pub enum NoteError {
    /// The cache cannot read or write its durable store.
    #[error("cache storage failure: {0}")]
    Storage(anyhow::Error),

    /// An action that needs an audio source ran before one was loaded.
    #[error("no audio source loaded")]
    MissingSource,

    /// Remote-URL sources cannot be transcribed locally yet.
    #[error("transcription is not implemented for remote URL sources")]
    UnsupportedSource,

    /// The optional embedded player widget did not load.
    #[error("embedded player widget is unavailable")]
    PlayerUnavailable,

    /// A note edit referenced a mark id this session does not hold.
    #[error("no mark with id {0}")]
    MarkNotFound(String),

    /// A transcription/summarization collaborator failed.
    #[error("engine failure: {0}")]
    Engine(anyhow::Error),
}
