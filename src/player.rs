use crate::error::NoteError;

/// Availability of the optional third-party embedded player.
///
/// The host decides once, at startup, whether the widget loaded; the
/// URL-playback path checks this flag before use instead of probing at call
/// time. When unavailable, the host hides that path and shows what is
/// missing, falling back to the simulated clock for local uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerWidget {
    available: bool,
}

impl PlayerWidget {
    pub fn new(available: bool) -> Self {
        Self { available }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn ensure_available(&self) -> Result<(), NoteError> {
        if self.available {
            Ok(())
        } else {
            Err(NoteError::PlayerUnavailable)
        }
    }
}
