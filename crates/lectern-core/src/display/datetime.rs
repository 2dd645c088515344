//! Date and time display utilities.

use std::fmt;

use jiff::{Timestamp, civil::Date, tz::TimeZone};

use crate::models::is_weekend;

/// Formats a `Timestamp` in the system time zone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Heading for a plan day, e.g. `2025-01-04 (Sat, weekend)`.
pub struct DayHeading(pub Date);

impl fmt::Display for DayHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if is_weekend(self.0) { "weekend" } else { "weekday" };
        write!(f, "{} ({}, {kind})", self.0, self.0.strftime("%a"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_day_heading() {
        assert_eq!(
            DayHeading(date(2025, 1, 4)).to_string(),
            "2025-01-04 (Sat, weekend)"
        );
        assert_eq!(
            DayHeading(date(2025, 1, 6)).to_string(),
            "2025-01-06 (Mon, weekday)"
        );
    }

    #[test]
    fn test_local_date_time_shape() {
        let ts = Timestamp::from_second(1736155800).unwrap();
        let text = LocalDateTime(&ts).to_string();
        // Offset depends on the host zone; only the layout is stable.
        assert!(text.len() >= "2025-01-06 09:30:00 X".len());
        assert!(text.starts_with("2025-01-0"));
    }
}
