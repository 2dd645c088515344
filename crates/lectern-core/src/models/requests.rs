//! Request types for updating models.

use super::CapacityConfig;

/// Partial capacity configuration.
///
/// Used both to update the stored configuration and to override it for a
/// single plan generation. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityOverrides {
    pub weekday_hours: Option<f64>,
    pub weekend_hours: Option<f64>,
    pub start_date: Option<String>,
}

impl CapacityOverrides {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.weekday_hours.is_none() && self.weekend_hours.is_none() && self.start_date.is_none()
    }

    /// Returns `base` with every provided field replaced.
    pub fn apply_to(&self, base: &CapacityConfig) -> CapacityConfig {
        CapacityConfig {
            weekday_hours: self.weekday_hours.unwrap_or(base.weekday_hours),
            weekend_hours: self.weekend_hours.unwrap_or(base.weekend_hours),
            start_date: self
                .start_date
                .clone()
                .unwrap_or_else(|| base.start_date.clone()),
        }
    }
}
