use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A user annotation pairing a playback position with a free-text note.
///
/// The timestamp is fixed at creation from the clock's position; only the
/// note may change afterwards. Owned by the session that created it; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    pub id: String,
    pub timestamp: Duration,
    pub note: String,
}

/// Read-view ordering for [`SessionTracker::list_marks`].
///
/// [`SessionTracker::list_marks`]: super::SessionTracker::list_marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOrder {
    /// Timestamp descending; ties keep creation order.
    NewestFirst,
    /// Creation order.
    Insertion,
}
