// End-to-end get-or-compute flow: cache misses run the engines exactly once
// per unique content; hits never touch them.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use anyhow::Result;
use async_trait::async_trait;
use podnote::{AudioSource, Database, NoteError, NoteTaker, PlayerWidget, Summarizer, Transcriber};
use tempfile::TempDir;

#[derive(Default)]
struct CountingTranscriber {
    calls: AtomicUsize,
}

#[async_trait]
impl Transcriber for CountingTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("T".to_string())
    }
}

#[derive(Default)]
struct CountingSummarizer {
    calls: AtomicUsize,
}

#[async_trait]
impl Summarizer for CountingSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("S({transcript})"))
    }
}

struct Fixture {
    _dir: TempDir,
    db: Database,
    notetaker: NoteTaker,
    transcriber: Arc<CountingTranscriber>,
    summarizer: Arc<CountingSummarizer>,
}

fn fixture() -> Result<Fixture> {
    let dir = TempDir::new()?;
    let db = Database::new(dir.path().join("cache.sqlite3"))?;
    let transcriber = Arc::new(CountingTranscriber::default());
    let summarizer = Arc::new(CountingSummarizer::default());
    let notetaker = NoteTaker::new(db.clone(), transcriber.clone(), summarizer.clone());

    Ok(Fixture {
        _dir: dir,
        db,
        notetaker,
        transcriber,
        summarizer,
    })
}

#[tokio::test]
async fn miss_runs_engines_and_fills_the_cache() -> Result<()> {
    let fx = fixture()?;
    let source = AudioSource::from_bytes(b"AAAA".to_vec());

    let notes = fx.notetaker.notes_for(Some(&source)).await?;

    assert!(!notes.from_cache);
    assert_eq!(notes.transcript, "T");
    assert_eq!(notes.summary, "S(T)");
    assert_eq!(fx.transcriber.calls.load(Ordering::SeqCst), 1);
    assert_eq!(fx.summarizer.calls.load(Ordering::SeqCst), 1);

    let cached = fx.db.get_cached(&source.fingerprint()).await?;
    assert!(cached.is_some());
    Ok(())
}

#[tokio::test]
async fn identical_bytes_hit_the_cache_without_engines() -> Result<()> {
    let fx = fixture()?;

    fx.notetaker
        .notes_for(Some(&AudioSource::from_bytes(b"AAAA".to_vec())))
        .await?;
    let rerun = fx
        .notetaker
        .notes_for(Some(&AudioSource::from_bytes(b"AAAA".to_vec())))
        .await?;

    assert!(rerun.from_cache);
    assert_eq!(rerun.transcript, "T");
    assert_eq!(rerun.summary, "S(T)");
    assert_eq!(fx.transcriber.calls.load(Ordering::SeqCst), 1);
    assert_eq!(fx.summarizer.calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn distinct_bytes_compute_separately() -> Result<()> {
    let fx = fixture()?;

    fx.notetaker
        .notes_for(Some(&AudioSource::from_bytes(b"AAAA".to_vec())))
        .await?;
    fx.notetaker
        .notes_for(Some(&AudioSource::from_bytes(b"BBBB".to_vec())))
        .await?;

    assert_eq!(fx.transcriber.calls.load(Ordering::SeqCst), 2);
    assert_eq!(fx.summarizer.calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn missing_source_is_blocked() -> Result<()> {
    let fx = fixture()?;

    let err = fx.notetaker.notes_for(None).await.unwrap_err();

    assert!(matches!(err, NoteError::MissingSource));
    assert_eq!(fx.transcriber.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn remote_miss_is_unsupported() -> Result<()> {
    let fx = fixture()?;
    let source = AudioSource::from_url("https://example.com/ep1.mp3");

    let err = fx.notetaker.notes_for(Some(&source)).await.unwrap_err();

    assert!(matches!(err, NoteError::UnsupportedSource));
    assert_eq!(fx.transcriber.calls.load(Ordering::SeqCst), 0);
    assert_eq!(fx.summarizer.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn cached_remote_source_is_still_served() -> Result<()> {
    let fx = fixture()?;
    let source = AudioSource::from_url("https://example.com/ep1.mp3");

    fx.db
        .put_cached(&source.fingerprint(), "T", "S")
        .await?;

    let notes = fx.notetaker.notes_for(Some(&source)).await?;

    assert!(notes.from_cache);
    assert_eq!(notes.transcript, "T");
    assert_eq!(fx.transcriber.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn missing_player_widget_is_a_typed_error() {
    let absent = PlayerWidget::new(false);
    assert!(!absent.is_available());
    assert!(matches!(
        absent.ensure_available().unwrap_err(),
        NoteError::PlayerUnavailable
    ));

    assert!(PlayerWidget::new(true).ensure_available().is_ok());
}
