pub mod clock;
pub mod mark;
pub mod tracker;

pub use clock::{hms, ClockStatus, PlaybackClock};
pub use mark::{Mark, MarkOrder};
pub use tracker::{SessionSnapshot, SessionTracker};
