use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ClockStatus {
    Idle,
    Running,
    Stopped,
}

impl Default for ClockStatus {
    fn default() -> Self {
        ClockStatus::Idle
    }
}

/// Simulated playback clock for local uploads, where the embedded audio
/// widget exposes no real position.
///
/// Position is derived, not stored: elapsed-since-anchor while running, a
/// frozen value while stopped, zero before the first start. Monotone
/// non-decreasing while running and never negative (`Instant` elapsed time
/// cannot go backwards).
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    status: ClockStatus,
    started_at: Option<DateTime<Utc>>,
    anchor: Option<Instant>,
    frozen: Duration,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self {
            status: ClockStatus::Idle,
            started_at: None,
            anchor: None,
            frozen: Duration::ZERO,
        }
    }
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the clock from zero.
    ///
    /// Calling this while running or stopped resets the reference instant,
    /// so a stop/start cycle restarts at zero instead of resuming the frozen
    /// value. Observed product behavior; keep unless a product decision says
    /// otherwise.
    pub fn start(&mut self) {
        self.status = ClockStatus::Running;
        self.started_at = Some(Utc::now());
        self.anchor = Some(Instant::now());
        self.frozen = Duration::ZERO;
    }

    /// Freeze the current position; later queries return it unchanged until
    /// the next `start`.
    pub fn stop(&mut self) {
        self.frozen = self.position();
        self.status = ClockStatus::Stopped;
        self.anchor = None;
    }

    pub fn position(&self) -> Duration {
        if let (ClockStatus::Running, Some(anchor)) = (self.status, self.anchor) {
            anchor.elapsed()
        } else {
            self.frozen
        }
    }

    pub fn status(&self) -> ClockStatus {
        self.status
    }

    /// Wall-clock instant of the most recent `start`, for display.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}

/// Render a position the way the player UI does: `H:MM:SS`, whole seconds.
pub fn hms(position: Duration) -> String {
    let total = position.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
