//! Progress summary derived from the lecture list.

use serde::{Deserialize, Serialize};

use super::Lecture;

/// Aggregate progress over all stored lectures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressSummary {
    /// Number of lectures
    pub total_count: u32,
    /// Number of completed lectures
    pub completed_count: u32,
    /// Hours across all lectures
    pub total_duration: f64,
    /// Hours across completed lectures
    pub spent_duration: f64,
}

impl ProgressSummary {
    /// Hours still to watch.
    pub fn remaining_duration(&self) -> f64 {
        (self.total_duration - self.spent_duration).max(0.0)
    }

    /// Lectures still to watch.
    pub fn pending_count(&self) -> u32 {
        self.total_count - self.completed_count
    }

    /// Completed share of total hours, in percent. Zero for an empty list.
    pub fn percent_complete(&self) -> f64 {
        if self.total_duration > 0.0 {
            self.spent_duration / self.total_duration * 100.0
        } else {
            0.0
        }
    }
}

impl From<&[Lecture]> for ProgressSummary {
    fn from(lectures: &[Lecture]) -> Self {
        lectures
            .iter()
            .fold(Self::default(), |mut summary, lecture| {
                summary.total_count += 1;
                summary.total_duration += lecture.duration;
                if lecture.completed {
                    summary.completed_count += 1;
                    summary.spent_duration += lecture.duration;
                }
                summary
            })
    }
}
