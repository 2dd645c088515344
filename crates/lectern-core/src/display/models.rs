//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so that data and presentation stay
//! separate. All output is markdown for the terminal renderer.

use std::fmt;

use super::{DayHeading, Hours};
use crate::models::{CapacityConfig, DayPlan, Lecture, ProgressSummary};

impl Lecture {
    /// Completion marker used in lists.
    pub fn status_icon(&self) -> &'static str {
        if self.completed { "✓" } else { "○" }
    }
}

impl fmt::Display for Lecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} **{}** {} ({} hrs, ID: {})",
            self.status_icon(),
            self.key(),
            self.topic,
            Hours(self.duration),
            self.id
        )
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", DayHeading(self.date))?;
        writeln!(f)?;

        if self.is_rest_day() {
            writeln!(f, "No lectures scheduled ({} hrs available).", Hours(self.capacity))?;
            writeln!(f)?;
            return Ok(());
        }

        let done: Vec<&Lecture> = self.lectures.iter().filter(|l| l.completed).collect();
        let done_hours: f64 = done.iter().map(|l| l.duration).sum();
        writeln!(
            f,
            "- Planned: {} / {} hrs ({}/{} lectures done)",
            Hours(self.used),
            Hours(self.capacity),
            done.len(),
            self.lectures.len()
        )?;
        writeln!(
            f,
            "- **Pending**: {} hrs - {} lectures",
            Hours((self.used - done_hours).max(0.0)),
            self.lectures.len() - done.len()
        )?;
        writeln!(f)?;

        for lecture in &self.lectures {
            write!(f, "{lecture}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for CapacityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Configuration")?;
        writeln!(f)?;
        writeln!(f, "- Weekday: {} hrs", Hours(self.weekday_hours))?;
        writeln!(f, "- Weekend: {} hrs", Hours(self.weekend_hours))?;

        match self.parsed_start_date() {
            Some(date) => writeln!(f, "- Start date: {date}"),
            None => writeln!(
                f,
                "- Start date: {} (not a date; plans start today)",
                self.start_date
            ),
        }
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Progress")?;
        writeln!(f)?;

        if self.total_count == 0 {
            return writeln!(f, "No lectures imported yet.");
        }

        writeln!(
            f,
            "- Lectures: {}/{} completed",
            self.completed_count, self.total_count
        )?;
        writeln!(
            f,
            "- Hours: {} / {} hrs ({:.0}%)",
            Hours(self.spent_duration),
            Hours(self.total_duration),
            self.percent_complete()
        )?;
        writeln!(
            f,
            "- Remaining: {} hrs - {} lectures",
            Hours(self.remaining_duration()),
            self.pending_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn lecture(id: u64, submodule: i64, duration: f64, completed: bool) -> Lecture {
        Lecture {
            id,
            module: 1,
            submodule,
            topic: format!("Topic {submodule}"),
            size: 0.0,
            duration,
            completed,
        }
    }

    #[test]
    fn test_lecture_display() {
        let output = lecture(7, 3, 0.75, false).to_string();
        assert_eq!(output, "- ○ **1.03** Topic 3 (0:45 hrs, ID: 7)\n");

        let output = lecture(7, 3, 1.0, true).to_string();
        assert!(output.starts_with("- ✓ **1.03**"));
    }

    #[test]
    fn test_day_plan_display() {
        let day = DayPlan {
            date: date(2025, 1, 6),
            is_weekend: false,
            capacity: 2.0,
            used: 1.5,
            lectures: vec![lecture(1, 1, 1.0, true), lecture(2, 2, 0.5, false)],
        };
        let output = day.to_string();
        assert!(output.starts_with("## 2025-01-06 (Mon, weekday)"));
        assert!(output.contains("Planned: 1:30 / 2 hrs (1/2 lectures done)"));
        assert!(output.contains("**Pending**: 0:30 hrs - 1 lectures"));
        assert!(output.contains("**1.02** Topic 2"));
    }

    #[test]
    fn test_rest_day_display() {
        let day = DayPlan {
            date: date(2025, 1, 4),
            is_weekend: true,
            capacity: 0.0,
            used: 0.0,
            lectures: vec![],
        };
        let output = day.to_string();
        assert!(output.contains("(Sat, weekend)"));
        assert!(output.contains("No lectures scheduled (0 hrs available)."));
    }

    #[test]
    fn test_config_display_flags_bad_start_date() {
        let config = CapacityConfig {
            weekday_hours: 1.5,
            weekend_hours: 8.0,
            start_date: "soon".to_string(),
        };
        let output = config.to_string();
        assert!(output.contains("Weekday: 1:30 hrs"));
        assert!(output.contains("Weekend: 8 hrs"));
        assert!(output.contains("soon (not a date; plans start today)"));
    }

    #[test]
    fn test_progress_display() {
        let lectures = vec![lecture(1, 1, 1.0, true), lecture(2, 2, 3.0, false)];
        let output = ProgressSummary::from(lectures.as_slice()).to_string();
        assert!(output.contains("Lectures: 1/2 completed"));
        assert!(output.contains("Hours: 1 / 4 hrs (25%)"));
        assert!(output.contains("Remaining: 3 hrs - 1 lectures"));

        let empty: Vec<Lecture> = Vec::new();
        let output = ProgressSummary::from(empty.as_slice()).to_string();
        assert!(output.contains("No lectures imported yet."));
    }
}
