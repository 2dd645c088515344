//! Capacity configuration for plan generation.

use jiff::civil::{Date, Weekday};
use jiff::Zoned;
use serde::{Deserialize, Serialize};

/// Hours available for a weekday when nothing has been configured.
pub const DEFAULT_WEEKDAY_HOURS: f64 = 2.0;

/// Hours available for a weekend day when nothing has been configured.
pub const DEFAULT_WEEKEND_HOURS: f64 = 8.0;

/// Per-day hour budgets and the first day eligible for scheduling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapacityConfig {
    /// Hours available Monday through Friday
    pub weekday_hours: f64,

    /// Hours available on Saturday and Sunday
    pub weekend_hours: f64,

    /// First scheduled day as `YYYY-MM-DD`. Kept verbatim; an unparseable
    /// value falls back to today when a plan is generated.
    pub start_date: String,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            weekday_hours: DEFAULT_WEEKDAY_HOURS,
            weekend_hours: DEFAULT_WEEKEND_HOURS,
            start_date: today().to_string(),
        }
    }
}

impl CapacityConfig {
    /// Parses the configured start date, if it is a valid calendar date.
    pub fn parsed_start_date(&self) -> Option<Date> {
        self.start_date.trim().parse::<Date>().ok()
    }

    /// Hours available on `date`.
    pub fn capacity_for(&self, date: Date) -> f64 {
        if is_weekend(date) {
            self.weekend_hours
        } else {
            self.weekday_hours
        }
    }

    /// The largest budget any day type offers.
    pub fn max_capacity(&self) -> f64 {
        self.weekday_hours.max(self.weekend_hours)
    }
}

/// Saturday and Sunday are weekend days.
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}
