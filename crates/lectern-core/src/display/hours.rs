//! Decimal hour formatting.

use std::fmt;

/// Formats decimal hours as `H` or `H:MM`.
///
/// Minutes are rounded to the nearest whole minute; a value that rounds up to
/// 60 minutes carries into the hour.
///
/// # Examples
///
/// ```rust
/// use lectern_core::display::Hours;
///
/// assert_eq!(Hours(2.0).to_string(), "2");
/// assert_eq!(Hours(1.5).to_string(), "1:30");
/// assert_eq!(Hours(0.75).to_string(), "0:45");
/// assert_eq!(Hours(1.9999).to_string(), "2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hours(pub f64);

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{}", self.0);
        }

        let sign = if self.0 < 0.0 { "-" } else { "" };
        let value = self.0.abs();
        let mut hours = value.floor() as u64;
        let mut minutes = ((value - value.floor()) * 60.0).round() as u64;
        if minutes == 60 {
            hours += 1;
            minutes = 0;
        }

        if minutes == 0 {
            write!(f, "{sign}{hours}")
        } else {
            write!(f, "{sign}{hours}:{minutes:02}")
        }
    }
}
