//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::{DayPlans, Lectures};
use crate::models::CapacityConfig;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use lectern_core::{display::{CreateResult, Lectures}, models::Lecture};
///
/// let imported = Lectures(vec![Lecture {
///     id: 1,
///     module: 1,
///     submodule: 1,
///     topic: "Intro".to_string(),
///     size: 0.0,
///     duration: 0.5,
///     completed: false,
/// }]);
/// let output = CreateResult::new(imported).to_string();
/// assert!(output.starts_with("Imported 1 lectures (0:30 hrs)"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Lectures> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} lectures ({} hrs)",
            self.resource.len(),
            super::Hours(self.resource.total_duration())
        )?;
        if !self.resource.is_empty() {
            writeln!(f)?;
            write!(f, "{}", self.resource)?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateResult<DayPlans> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plans = &self.resource;
        match (plans.0.first(), plans.0.last()) {
            (Some(first), Some(last)) => writeln!(
                f,
                "Generated plan: {} lectures over {} days ({} to {})",
                plans.lecture_count(),
                plans.len(),
                first.date,
                last.date
            )?,
            _ => writeln!(f, "Generated plan: nothing pending")?,
        }

        if !plans.is_empty() {
            writeln!(f)?;
            write!(f, "{plans}")?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of update operations, with a
/// list of the changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for UpdateResult<Lectures> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} lectures", self.resource.len())?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<CapacityConfig> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated configuration")?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Lectures> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lecture in &self.resource {
            writeln!(
                f,
                "Deleted lecture {} '{}' (ID: {})",
                lecture.key(),
                lecture.topic,
                lecture.id
            )?;
        }
        Ok(())
    }
}
