pub mod db;
pub mod engines;
pub mod error;
pub mod fingerprint;
pub mod notetaker;
pub mod player;
pub mod session;
pub mod source;

pub use db::{CacheEntry, Database};
pub use engines::{StubSummarizer, StubTranscriber, Summarizer, Transcriber};
pub use error::NoteError;
pub use fingerprint::Fingerprint;
pub use notetaker::{NoteTaker, Notes};
pub use player::PlayerWidget;
pub use session::{
    hms, ClockStatus, Mark, MarkOrder, PlaybackClock, SessionSnapshot, SessionTracker,
};
pub use source::AudioSource;
