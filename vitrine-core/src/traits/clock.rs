//! Monotonic time source

/// Monotonic millisecond clock
///
/// The counter is free-running and wraps after ~49 days; always compare
/// timestamps with [`elapsed_ms`].
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u32;
}

/// Milliseconds from `since` to `now`, tolerant of counter wrap
pub const fn elapsed_ms(since: u32, now: u32) -> u32 {
    now.wrapping_sub(since)
}
