//! Plan generation and lookup for the Planner.

use log::debug;

use super::{Planner, config_ops::validated_overrides};
use crate::{
    error::Result,
    export::ExportBundle,
    models::DayPlan,
    params::{CapacityParams, ShowDay},
    schedule,
};

impl Planner {
    /// Generates a plan for every pending lecture and replaces the stored
    /// plan with it.
    ///
    /// Fields set in `params` override the stored configuration for this
    /// generation only; they are not saved.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Unschedulable` when a pending lecture is longer
    /// than any day allows, and `PlannerError::InvalidInput` for unusable
    /// capacities. The stored plan is left unchanged on error.
    pub async fn generate_plan(&self, params: &CapacityParams) -> Result<Vec<DayPlan>> {
        let overrides = validated_overrides(params)?;

        self.with_database(move |db| {
            let config = overrides.apply_to(&db.get_config()?.unwrap_or_default());
            let lectures = db.list_lectures(None)?;
            let plan = schedule::generate(&lectures, &config)?;
            db.replace_plan(&plan)?;

            debug!("Stored plan of {} days", plan.len());
            Ok(plan)
        })
        .await
    }

    /// Retrieves the stored plan. Completion flags reflect the lectures'
    /// current state, not the state at generation time.
    pub async fn get_plan(&self) -> Result<Vec<DayPlan>> {
        self.with_database(|db| db.get_plan()).await
    }

    /// Retrieves the stored plan for one day, today by default.
    pub async fn plan_for_day(&self, params: &ShowDay) -> Result<Option<DayPlan>> {
        let date = params.resolve()?;
        self.with_database(move |db| db.get_plan_day(date)).await
    }

    /// Collects every lecture, the configuration and the stored plan.
    pub async fn export(&self) -> Result<ExportBundle> {
        self.with_database(|db| {
            let items = db.list_lectures(None)?;
            let config = db.get_config()?.unwrap_or_default();
            let plan = db.get_plan()?;
            Ok(ExportBundle::new(items, config, plan))
        })
        .await
    }
}
