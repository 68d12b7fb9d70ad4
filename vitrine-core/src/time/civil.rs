//! Unix seconds to proleptic Gregorian calendar fields

/// Broken-down calendar time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: i32,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
    /// 0 = Sunday
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

const SECS_PER_DAY: i64 = 86_400;

/// Short English weekday names indexed by [`DateTime::weekday`]
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl DateTime {
    /// Convert seconds since 1970-01-01T00:00:00
    pub fn from_unix(secs: i64) -> Self {
        let days = secs.div_euclid(SECS_PER_DAY);
        let sod = secs.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            // 1970-01-01 was a Thursday
            weekday: (days + 4).rem_euclid(7) as u8,
            hour: (sod / 3600) as u8,
            minute: (sod / 60 % 60) as u8,
            second: (sod % 60) as u8,
        }
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.weekday as usize % 7]
    }
}

/// Days since the epoch to `(year, month, day)`
///
/// Works in 400-year eras starting on March 1st so the leap day falls at
/// the end of each computed year.
fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(year: i32, month: u8, day: u8, weekday: u8, h: u8, m: u8, s: u8) -> DateTime {
        DateTime {
            year,
            month,
            day,
            weekday,
            hour: h,
            minute: m,
            second: s,
        }
    }

    #[test]
    fn test_epoch() {
        assert_eq!(DateTime::from_unix(0), dt(1970, 1, 1, 4, 0, 0, 0));
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(DateTime::from_unix(1_741_478_400), dt(2025, 3, 9, 0, 0, 0, 0));
        assert_eq!(DateTime::from_unix(1_700_000_001), dt(2023, 11, 14, 2, 22, 13, 21));
        assert_eq!(DateTime::from_unix(4_102_444_799), dt(2099, 12, 31, 4, 23, 59, 59));
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(DateTime::from_unix(1_709_164_800), dt(2024, 2, 29, 4, 0, 0, 0));
        assert_eq!(DateTime::from_unix(1_709_164_800 + 86_400), dt(2024, 3, 1, 5, 0, 0, 0));
    }

    #[test]
    fn test_before_epoch() {
        assert_eq!(DateTime::from_unix(-1), dt(1969, 12, 31, 3, 23, 59, 59));
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(DateTime::from_unix(1_741_478_400).weekday_name(), "Sun");
        assert_eq!(DateTime::from_unix(0).weekday_name(), "Thu");
    }
}
