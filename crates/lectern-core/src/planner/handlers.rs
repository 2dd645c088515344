//! Planner operations that return display wrapper types.

use super::Planner;
use crate::{
    display::{
        CreateResult, DayPlans, DeleteResult, Hours, Lectures, OperationStatus, UpdateResult,
    },
    error::Result,
    models::{CapacityConfig, LectureFilter},
    params::{
        AddDemoLectures, CapacityParams, ClearAll, ImportLectures, ListLectures, RemoveLectures,
        SetCompleted,
    },
};

impl Planner {
    /// Handle listing lectures with the given filter.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use lectern_core::{params::ListLectures, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let params = ListLectures { query: Some("traits".to_string()), ..Default::default() };
    /// let lectures = planner.list_lectures_display(&params).await?;
    /// println!("{lectures}");
    /// # Result::<(), lectern_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_lectures_display(&self, params: &ListLectures) -> Result<Lectures> {
        let filter = Some(LectureFilter::from(params));
        Ok(Lectures(self.list_lectures(filter).await?))
    }

    /// Handle importing lectures.
    pub async fn import_lectures_result(
        &self,
        params: &ImportLectures,
    ) -> Result<CreateResult<Lectures>> {
        let lectures = self.import_lectures(params).await?;
        Ok(CreateResult::new(Lectures(lectures)))
    }

    /// Handle adding demo lectures.
    pub async fn add_demo_lectures_result(
        &self,
        params: &AddDemoLectures,
    ) -> Result<CreateResult<Lectures>> {
        let lectures = self.add_demo_lectures(params).await?;
        Ok(CreateResult::new(Lectures(lectures)))
    }

    /// Handle marking lectures completed or pending.
    pub async fn set_completed_result(
        &self,
        params: &SetCompleted,
    ) -> Result<UpdateResult<Lectures>> {
        let lectures = self.set_completed(params).await?;
        let state = if params.completed { "completed" } else { "pending" };
        let changes = vec![format!("Marked {} lectures as {state}", lectures.len())];
        Ok(UpdateResult::with_changes(Lectures(lectures), changes))
    }

    /// Handle bulk completion.
    pub async fn set_all_completed_status(&self, completed: bool) -> Result<OperationStatus> {
        let changed = self.set_all_completed(completed).await?;
        let state = if completed { "completed" } else { "pending" };
        Ok(OperationStatus::success(format!(
            "Marked {changed} lectures as {state}"
        )))
    }

    /// Handle permanent removal of lectures.
    pub async fn remove_lectures_result(
        &self,
        params: &RemoveLectures,
    ) -> Result<DeleteResult<Lectures>> {
        let removed = self.remove_lectures(params).await?;
        Ok(DeleteResult::new(Lectures(removed)))
    }

    /// Handle wiping all stored data.
    pub async fn clear_all_status(&self, params: &ClearAll) -> Result<OperationStatus> {
        self.clear_all(params).await?;
        Ok(OperationStatus::success(
            "Removed all lectures, the plan and the configuration",
        ))
    }

    /// Handle a configuration update, listing each field that changed.
    pub async fn update_config_result(
        &self,
        params: &CapacityParams,
    ) -> Result<UpdateResult<CapacityConfig>> {
        let before = self.get_config().await?;
        let after = self.update_config(params).await?;
        let changes = config_changes(&before, &after);
        Ok(UpdateResult::with_changes(after, changes))
    }

    /// Handle plan generation.
    pub async fn generate_plan_result(
        &self,
        params: &CapacityParams,
    ) -> Result<CreateResult<DayPlans>> {
        let plan = self.generate_plan(params).await?;
        Ok(CreateResult::new(DayPlans(plan)))
    }

    /// Handle showing the stored plan.
    pub async fn get_plan_display(&self) -> Result<DayPlans> {
        Ok(DayPlans(self.get_plan().await?))
    }
}

fn config_changes(before: &CapacityConfig, after: &CapacityConfig) -> Vec<String> {
    let mut changes = Vec::new();
    if before.weekday_hours != after.weekday_hours {
        changes.push(format!(
            "Weekday hours: {} -> {}",
            Hours(before.weekday_hours),
            Hours(after.weekday_hours)
        ));
    }
    if before.weekend_hours != after.weekend_hours {
        changes.push(format!(
            "Weekend hours: {} -> {}",
            Hours(before.weekend_hours),
            Hours(after.weekend_hours)
        ));
    }
    if before.start_date != after.start_date {
        changes.push(format!(
            "Start date: {} -> {}",
            before.start_date, after.start_date
        ));
    }
    changes
}
