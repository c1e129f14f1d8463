use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use log::{info, warn};
use podnote::{
    hms, AudioSource, Database, MarkOrder, NoteTaker, PlayerWidget, SessionTracker,
    StubSummarizer, StubTranscriber,
};

// Built-in demo clip: fake audio bytes, enough to exercise the
// fingerprint/cache path without shipping real media.
const DEMO_CLIP: &[u8] = b"podnote built-in demo clip";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("podnote demo host starting up");

    let data_dir = dirs::data_dir()
        .context("no user data directory available")?
        .join("podnote");
    std::fs::create_dir_all(&data_dir)?;

    let db = Database::new(data_dir.join("podnote.sqlite3"))?;
    let notetaker = NoteTaker::new(
        db,
        Arc::new(StubTranscriber::default()),
        Arc::new(StubSummarizer::default()),
    );

    // The embedded player is an optional component; this host ships without
    // it, so URL playback stays disabled and the mock clock drives positions.
    let player = PlayerWidget::new(false);
    if let Err(err) = player.ensure_available() {
        warn!("{err}; URL playback disabled");
    }

    let mut session = SessionTracker::new();
    let source = AudioSource::from_bytes(DEMO_CLIP);

    session.start_clock();
    tokio::time::sleep(Duration::from_millis(400)).await;
    session.add_mark("intro starts");
    tokio::time::sleep(Duration::from_millis(400)).await;
    let quote = session.add_mark("good quote");
    session.stop_clock();

    session.edit_mark_note(&quote.id, "quote to clip later")?;

    let notes = notetaker.notes_for(Some(&source)).await?;
    info!(
        "summary ready (from cache: {}): {}",
        notes.from_cache, notes.summary
    );
    session.set_notes(notes);

    // Identical bytes on a rerun are served from the cache; the stub
    // engines do not run again.
    let rerun = notetaker.notes_for(Some(&source)).await?;
    info!("rerun served from cache: {}", rerun.from_cache);

    for mark in session.list_marks(MarkOrder::NewestFirst) {
        info!("mark at {}: {}", hms(mark.timestamp), mark.note);
    }

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);

    Ok(())
}
