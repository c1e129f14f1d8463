use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::{error::NoteError, notetaker::Notes};

use super::{clock::PlaybackClock, ClockStatus, Mark, MarkOrder};

/// Ephemeral per-session state: the simulated playback clock, the marks the
/// user has saved, and the transcript/summary currently on screen.
///
/// One tracker per interactive session, touched only by the thread serving
/// that session. Hosts running several sessions in one process keep one
/// tracker each, never shared.
#[derive(Debug, Default)]
pub struct SessionTracker {
    clock: PlaybackClock,
    player_position: Option<Duration>,
    marks: Vec<Mark>,
    notes: Option<Notes>,
}

/// Serializable view of a session for debug panels and host bindings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub clock_status: ClockStatus,
    pub position_secs: f64,
    pub marks: Vec<Mark>,
    pub has_notes: bool,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_clock(&mut self) {
        self.clock.start();
    }

    pub fn stop_clock(&mut self) {
        self.clock.stop();
    }

    /// Current playback position. A position reported by the embedded
    /// player wins over the simulated clock; with neither, zero.
    pub fn current_position(&self) -> Duration {
        self.player_position
            .unwrap_or_else(|| self.clock.position())
    }

    /// Record a played-seconds progress event from the embedded player.
    /// Negative values clamp to zero.
    pub fn record_player_position(&mut self, seconds: f64) {
        self.player_position = Some(Duration::from_secs_f64(seconds.max(0.0)));
    }

    /// Forget the player-reported position, e.g. when the source changes;
    /// the simulated clock takes over again.
    pub fn clear_player_position(&mut self) {
        self.player_position = None;
    }

    /// Save a mark at the current position and hand it back so the host can
    /// bind its editable note field.
    pub fn add_mark(&mut self, note: impl Into<String>) -> Mark {
        let mark = Mark {
            id: Uuid::new_v4().to_string(),
            timestamp: self.current_position(),
            note: note.into(),
        };
        self.marks.push(mark.clone());
        mark
    }

    /// Replace a mark's note in place. Timestamp and list position stay as
    /// they are.
    pub fn edit_mark_note(
        &mut self,
        mark_id: &str,
        note: impl Into<String>,
    ) -> Result<(), NoteError> {
        match self.marks.iter_mut().find(|mark| mark.id == mark_id) {
            Some(mark) => {
                mark.note = note.into();
                Ok(())
            }
            None => Err(NoteError::MarkNotFound(mark_id.to_string())),
        }
    }

    /// Read view of the marks; the underlying creation order is untouched.
    pub fn list_marks(&self, order: MarkOrder) -> Vec<Mark> {
        let mut marks = self.marks.clone();
        if order == MarkOrder::NewestFirst {
            // stable sort: equal timestamps keep creation order
            marks.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }
        marks
    }

    pub fn set_notes(&mut self, notes: Notes) {
        self.notes = Some(notes);
    }

    pub fn notes(&self) -> Option<&Notes> {
        self.notes.as_ref()
    }

    pub fn clock_status(&self) -> ClockStatus {
        self.clock.status()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            clock_status: self.clock.status(),
            position_secs: self.current_position().as_secs_f64(),
            marks: self.list_marks(MarkOrder::NewestFirst),
            has_notes: self.notes.is_some(),
        }
    }
}
