//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{DayPlan, Lecture};

/// Newtype wrapper for displaying lists of lectures.
///
/// # Examples
///
/// ```rust
/// use lectern_core::{display::Lectures, models::Lecture};
///
/// let lectures = Lectures(vec![Lecture {
///     id: 1,
///     module: 2,
///     submodule: 4,
///     topic: "Lifetimes".to_string(),
///     size: 0.0,
///     duration: 1.5,
///     completed: false,
/// }]);
/// let output = lectures.to_string();
/// assert!(output.contains("**2.04** Lifetimes"));
/// assert!(output.contains("1:30 hrs"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lectures(pub Vec<Lecture>);

impl Lectures {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of lectures in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the lectures.
    pub fn iter(&self) -> std::slice::Iter<'_, Lecture> {
        self.0.iter()
    }

    /// Sum of lecture durations in hours.
    pub fn total_duration(&self) -> f64 {
        self.0.iter().map(|l| l.duration).sum()
    }
}

impl Index<usize> for Lectures {
    type Output = Lecture;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Lectures {
    type Item = Lecture;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lectures {
    type Item = &'a Lecture;
    type IntoIter = std::slice::Iter<'a, Lecture>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Lectures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No lectures found.");
        }

        let mut module = None;
        for lecture in &self.0 {
            if module != Some(lecture.module) {
                if module.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## Module {}", lecture.module)?;
                writeln!(f)?;
                module = Some(lecture.module);
            }
            write!(f, "{lecture}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a generated plan, one section per day.
#[derive(Debug, Clone, Default)]
pub struct DayPlans(pub Vec<DayPlan>);

impl DayPlans {
    /// Check if the plan has no days.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of days in the plan.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the days.
    pub fn iter(&self) -> std::slice::Iter<'_, DayPlan> {
        self.0.iter()
    }

    /// Number of lectures placed across all days.
    pub fn lecture_count(&self) -> usize {
        self.0.iter().map(|d| d.lectures.len()).sum()
    }
}

impl Index<usize> for DayPlans {
    type Output = DayPlan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for DayPlans {
    type Item = DayPlan;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DayPlans {
    type Item = &'a DayPlan;
    type IntoIter = std::slice::Iter<'a, DayPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DayPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plan found. Nothing is pending or no plan was generated.")
        } else {
            for day in &self.0 {
                write!(f, "{day}")?;
            }
            Ok(())
        }
    }
}
