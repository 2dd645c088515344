//! Lecture operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    demo::{demo_lectures, demo_rng},
    error::{PlannerError, Result},
    import::parse_lecture_records,
    models::{Lecture, LectureFilter, ProgressSummary},
    params::{AddDemoLectures, ClearAll, Id, ImportLectures, RemoveLectures, SetCompleted},
};

impl Planner {
    /// Normalizes and stores a JSON array of lecture records.
    ///
    /// The payload is parsed completely before anything is written, and the
    /// insert runs in one transaction, so a rejected import leaves the store
    /// untouched.
    pub async fn import_lectures(&self, params: &ImportLectures) -> Result<Vec<Lecture>> {
        let records = parse_lecture_records(&params.payload)?;
        let stored = self
            .with_database(move |db| db.add_lectures(&records))
            .await?;

        info!("Imported {} lectures", stored.len());
        Ok(stored)
    }

    /// Adds randomly generated pending lectures through the same insert path
    /// as an import.
    pub async fn add_demo_lectures(&self, params: &AddDemoLectures) -> Result<Vec<Lecture>> {
        if params.count == 0 {
            return Err(PlannerError::invalid_input("count")
                .with_reason("At least one demo lecture must be requested"));
        }

        let records = demo_lectures(params.count, &mut demo_rng(params.seed));
        let stored = self
            .with_database(move |db| db.add_lectures(&records))
            .await?;

        info!("Added {} demo lectures", stored.len());
        Ok(stored)
    }

    /// Retrieves a lecture by its ID.
    pub async fn get_lecture(&self, params: &Id) -> Result<Option<Lecture>> {
        let id = params.id;
        self.with_database(move |db| db.get_lecture(id)).await
    }

    /// Lists lectures in admission order with optional filtering.
    pub async fn list_lectures(&self, filter: Option<LectureFilter>) -> Result<Vec<Lecture>> {
        self.with_database(move |db| db.list_lectures(filter.as_ref()))
            .await
    }

    /// Marks lectures as completed or pending. Unknown IDs reject the whole
    /// request.
    pub async fn set_completed(&self, params: &SetCompleted) -> Result<Vec<Lecture>> {
        if params.ids.is_empty() {
            return Err(PlannerError::invalid_input("ids")
                .with_reason("At least one lecture ID is required"));
        }

        let ids = params.ids.clone();
        let completed = params.completed;
        self.with_database(move |db| db.set_completed(&ids, completed))
            .await
    }

    /// Marks every lecture as completed or pending and returns how many
    /// changed.
    pub async fn set_all_completed(&self, completed: bool) -> Result<usize> {
        let changed = self
            .with_database(move |db| db.set_all_completed(completed))
            .await?;

        info!("Marked {changed} lectures as {}", if completed { "completed" } else { "pending" });
        Ok(changed)
    }

    /// Permanently removes lectures. Requires `confirmed`.
    pub async fn remove_lectures(&self, params: &RemoveLectures) -> Result<Vec<Lecture>> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed")
                .with_reason("Removing lectures cannot be undone; confirmation is required"));
        }
        if params.ids.is_empty() {
            return Err(PlannerError::invalid_input("ids")
                .with_reason("At least one lecture ID is required"));
        }

        let ids = params.ids.clone();
        let removed = self
            .with_database(move |db| db.remove_lectures(&ids))
            .await?;

        info!("Removed {} lectures", removed.len());
        Ok(removed)
    }

    /// Removes every lecture, the stored plan and the configuration.
    /// Requires `confirmed`.
    pub async fn clear_all(&self, params: &ClearAll) -> Result<()> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed")
                .with_reason("Clearing all data cannot be undone; confirmation is required"));
        }

        self.with_database(|db| db.clear_all()).await?;
        info!("Cleared all lectures, plan and configuration");
        Ok(())
    }

    /// Completion totals over every stored lecture.
    pub async fn progress(&self) -> Result<ProgressSummary> {
        let lectures = self.list_lectures(None).await?;
        Ok(ProgressSummary::from(lectures.as_slice()))
    }
}
