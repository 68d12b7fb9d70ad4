//! Wall-clock time
//!
//! The board has no battery-backed clock. A host sends the current Unix
//! time over the serial link; from then on the wall clock is derived from
//! the monotonic timer.

pub mod civil;
pub mod clock;
pub mod sync;

pub use civil::DateTime;
pub use clock::{format_date, format_time, WallClock};
pub use sync::{SyncError, SyncEvent, TimeSyncParser};
