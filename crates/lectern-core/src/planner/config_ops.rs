//! Capacity configuration operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::{CapacityConfig, CapacityOverrides},
    params::CapacityParams,
};

impl Planner {
    /// Returns the stored configuration, or the defaults (2 weekday hours,
    /// 8 weekend hours, starting today) when none was saved.
    pub async fn get_config(&self) -> Result<CapacityConfig> {
        self.with_database(|db| Ok(db.get_config()?.unwrap_or_default()))
            .await
    }

    /// Merges the provided fields into the stored configuration.
    ///
    /// The start date is stored verbatim; an unparseable value falls back to
    /// today when a plan is generated.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for negative or non-finite hours.
    pub async fn update_config(&self, params: &CapacityParams) -> Result<CapacityConfig> {
        let overrides = validated_overrides(params)?;

        let config = self
            .with_database(move |db| {
                let current = db.get_config()?.unwrap_or_default();
                let updated = overrides.apply_to(&current);
                db.set_config(&updated)?;
                Ok(updated)
            })
            .await?;

        info!(
            "Configuration updated: weekday {}h, weekend {}h, start {}",
            config.weekday_hours, config.weekend_hours, config.start_date
        );
        Ok(config)
    }
}

/// Converts `params` into overrides, rejecting hour values that cannot be a
/// daily budget.
pub(crate) fn validated_overrides(params: &CapacityParams) -> Result<CapacityOverrides> {
    validate_hours("weekday_hours", params.weekday_hours)?;
    validate_hours("weekend_hours", params.weekend_hours)?;
    Ok(CapacityOverrides::from(params))
}

fn validate_hours(field: &str, hours: Option<f64>) -> Result<()> {
    match hours {
        Some(h) if !h.is_finite() => Err(PlannerError::invalid_input(field)
            .with_reason(format!("{h} is not a number of hours"))),
        Some(h) if h < 0.0 => Err(PlannerError::invalid_input(field)
            .with_reason(format!("{h} must not be negative"))),
        _ => Ok(()),
    }
}
