//! Wall clock derived from a synced epoch and the monotonic timer

use core::fmt::Write;

use heapless::String;

use super::civil::DateTime;

pub const DATE_TEXT_LEN: usize = 16;
pub const TIME_TEXT_LEN: usize = 8;

/// Unix time anchored to a monotonic timestamp
///
/// Invalid until the first successful sync.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock {
    anchor: Option<Anchor>,
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    epoch_secs: u64,
    at_ms: u64,
}

impl WallClock {
    pub const fn new() -> Self {
        Self { anchor: None }
    }

    /// Record that it is `epoch_secs` UTC at monotonic time `now_ms`
    pub fn set_epoch(&mut self, epoch_secs: u64, now_ms: u64) {
        self.anchor = Some(Anchor {
            epoch_secs,
            at_ms: now_ms,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.anchor.is_some()
    }

    /// Current Unix seconds, if synced
    pub fn utc_seconds(&self, now_ms: u64) -> Option<u64> {
        let a = self.anchor?;
        Some(a.epoch_secs + now_ms.saturating_sub(a.at_ms) / 1000)
    }

    /// Local calendar time for a fixed offset from UTC
    ///
    /// The offset is applied before conversion, so day, month and year
    /// all roll over together.
    pub fn local_datetime(&self, now_ms: u64, tz_offset_hours: i8) -> Option<DateTime> {
        let utc = self.utc_seconds(now_ms)? as i64;
        Some(DateTime::from_unix(utc + tz_offset_hours as i64 * 3600))
    }
}

/// `"Sun 03/09/2025"`
pub fn format_date(dt: &DateTime) -> String<DATE_TEXT_LEN> {
    let mut s = String::new();
    let _ = write!(s, "{} {:02}/{:02}/{:04}", dt.weekday_name(), dt.month, dt.day, dt.year);
    s
}

/// `"HH:MM:SS"`
pub fn format_time(dt: &DateTime) -> String<TIME_TEXT_LEN> {
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", dt.hour, dt.minute, dt.second);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_until_synced() {
        let clock = WallClock::new();
        assert!(!clock.is_valid());
        assert_eq!(clock.utc_seconds(5000), None);
        assert_eq!(clock.local_datetime(5000, -5), None);
    }

    #[test]
    fn test_advances_with_monotonic_time() {
        let mut clock = WallClock::new();
        clock.set_epoch(1_741_478_400, 10_000);

        assert!(clock.is_valid());
        assert_eq!(clock.utc_seconds(10_000), Some(1_741_478_400));
        assert_eq!(clock.utc_seconds(10_999), Some(1_741_478_400));
        assert_eq!(clock.utc_seconds(13_500), Some(1_741_478_403));
    }

    #[test]
    fn test_resync_replaces_anchor() {
        let mut clock = WallClock::new();
        clock.set_epoch(1_741_478_400, 0);
        clock.set_epoch(1_800_000_000, 60_000);
        assert_eq!(clock.utc_seconds(61_000), Some(1_800_000_001));
    }

    #[test]
    fn test_negative_offset_rolls_back_year() {
        let mut clock = WallClock::new();
        // 2025-01-01 00:00 UTC
        clock.set_epoch(1_735_689_600, 0);
        let dt = clock.local_datetime(0, -5).unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour), (2024, 12, 31, 19));
        assert_eq!(dt.weekday_name(), "Tue");
    }

    #[test]
    fn test_negative_offset_rolls_back_month() {
        let mut clock = WallClock::new();
        // 2025-03-01 03:00 UTC
        clock.set_epoch(1_740_798_000, 0);
        let dt = clock.local_datetime(0, -5).unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour), (2025, 2, 28, 22));
        assert_eq!(dt.weekday_name(), "Fri");
    }

    #[test]
    fn test_positive_offset_rolls_forward() {
        let mut clock = WallClock::new();
        // 2025-12-31 23:59:59 UTC
        clock.set_epoch(1_767_225_599, 0);
        let dt = clock.local_datetime(1000, 2).unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour), (2026, 1, 1, 2));
    }

    #[test]
    fn test_format() {
        let mut clock = WallClock::new();
        // 2025-03-09 05:00 UTC = midnight at UTC-5
        clock.set_epoch(1_741_496_400, 0);
        let dt = clock.local_datetime(0, -5).unwrap();
        assert_eq!(format_date(&dt).as_str(), "Sun 03/09/2025");
        assert_eq!(format_time(&dt).as_str(), "00:00:00");

        let dt = clock.local_datetime(3_723_000, -5).unwrap();
        assert_eq!(format_time(&dt).as_str(), "01:02:03");
    }
}
