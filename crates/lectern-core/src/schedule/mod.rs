//! Greedy day-by-day plan generation.
//!
//! The scheduler is a pure function over the lecture list and the capacity
//! configuration. Pending lectures are admitted in `(module, submodule)`
//! order, front to back, into consecutive calendar days. A lecture is never
//! split across days and never reordered; a day closes as soon as the next
//! lecture would overflow its budget.
//!
//! ```text
//! pending (sorted) ──▶ [ Mon 2h ][ Tue 2h ][ Wed 2h ] ...
//!                        1.01      1.03      2.01
//!                        1.02                2.02
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use lectern_core::models::{CapacityConfig, Lecture};
//! use lectern_core::schedule::generate;
//!
//! let lectures: Vec<Lecture> = [(1, 1), (1, 2), (2, 1)]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, (module, submodule))| Lecture {
//!         id: i as u64 + 1,
//!         module,
//!         submodule,
//!         topic: format!("Lecture {module}.{submodule}"),
//!         size: 0.0,
//!         duration: 1.0,
//!         completed: false,
//!     })
//!     .collect();
//!
//! let config = CapacityConfig {
//!     weekday_hours: 2.0,
//!     weekend_hours: 0.0,
//!     start_date: "2025-01-06".to_string(), // a Monday
//! };
//!
//! let plan = generate(&lectures, &config)?;
//! assert_eq!(plan.len(), 2);
//! assert_eq!(plan[0].date, date(2025, 1, 6));
//! assert_eq!(plan[0].lectures.len(), 2);
//! assert_eq!(plan[1].lectures[0].key(), "2.01");
//! # Ok::<(), lectern_core::PlannerError>(())
//! ```

use jiff::civil::Date;
use log::{debug, warn};

use crate::{
    error::{PlannerError, Result},
    models::{is_weekend, today, CapacityConfig, DayPlan, Lecture},
};

#[cfg(test)]
mod tests;

/// Tolerance for capacity comparisons, so that an exact fit is not rejected
/// because of binary rounding in the running sum.
pub const CAPACITY_EPSILON: f64 = 1e-9;

/// Generates a fresh plan, falling back to today when the configured start
/// date cannot be parsed.
///
/// # Errors
///
/// - `PlannerError::InvalidInput` if a capacity is not finite, if neither day
///   type has a positive capacity, or if a pending lecture has a negative or
///   non-finite duration
/// - `PlannerError::Unschedulable` if a pending lecture is longer than every
///   day type's capacity
pub fn generate(lectures: &[Lecture], config: &CapacityConfig) -> Result<Vec<DayPlan>> {
    generate_from(lectures, config, today())
}

/// Same as [`generate`], with an explicit fallback start date.
pub fn generate_from(
    lectures: &[Lecture],
    config: &CapacityConfig,
    fallback_start: Date,
) -> Result<Vec<DayPlan>> {
    validate_capacity(config)?;
    let pending = pending_in_admission_order(lectures);
    validate_durations(&pending)?;

    let mut current = match config.parsed_start_date() {
        Some(start) => start,
        None => {
            warn!(
                "Unparseable start date '{}', starting from {fallback_start}",
                config.start_date
            );
            fallback_start
        }
    };

    let max_capacity = config.max_capacity();
    let mut remaining = pending.as_slice();
    let mut plan = Vec::new();

    while let Some(next) = remaining.first() {
        let capacity = config.capacity_for(current);
        let (admitted, used) = admit(remaining, capacity);

        if admitted == 0 && next.duration > max_capacity + CAPACITY_EPSILON {
            return Err(PlannerError::Unschedulable {
                key: next.key(),
                duration: next.duration,
                max_capacity,
            });
        }

        let (placed, rest) = remaining.split_at(admitted);
        plan.push(DayPlan {
            date: current,
            is_weekend: is_weekend(current),
            capacity,
            used,
            lectures: placed.iter().map(|&lecture| lecture.clone()).collect(),
        });
        remaining = rest;

        if !remaining.is_empty() {
            current = current.tomorrow().map_err(|e| {
                PlannerError::invalid_input("start_date")
                    .with_reason(format!("plan runs past the supported calendar: {e}"))
            })?;
        }
    }

    debug!(
        "Generated {} day plan(s) for {} pending lecture(s)",
        plan.len(),
        pending.len()
    );
    Ok(plan)
}

/// Pending lectures sorted by `(module, submodule)`. The sort is stable, so
/// lectures sharing a key keep their input order.
pub fn pending_in_admission_order(lectures: &[Lecture]) -> Vec<&Lecture> {
    let mut pending: Vec<&Lecture> = lectures.iter().filter(|l| !l.completed).collect();
    pending.sort_by_key(|l| l.order_key());
    pending
}

/// Admits lectures from the front of `queue` while they fit into
/// `capacity`. Returns the number admitted and the hours they use.
fn admit(queue: &[&Lecture], capacity: f64) -> (usize, f64) {
    if capacity <= 0.0 {
        return (0, 0.0);
    }

    let mut used = 0.0;
    let mut admitted = 0;
    for lecture in queue {
        if used + lecture.duration > capacity + CAPACITY_EPSILON {
            break;
        }
        used += lecture.duration;
        admitted += 1;
    }
    (admitted, used)
}

fn validate_capacity(config: &CapacityConfig) -> Result<()> {
    for (field, hours) in [
        ("weekday_hours", config.weekday_hours),
        ("weekend_hours", config.weekend_hours),
    ] {
        if !hours.is_finite() {
            return Err(PlannerError::invalid_input(field)
                .with_reason(format!("capacity must be a finite number of hours, got {hours}")));
        }
    }

    if config.weekday_hours <= 0.0 && config.weekend_hours <= 0.0 {
        return Err(PlannerError::invalid_input("capacity")
            .with_reason("at least one of weekday or weekend hours must be positive"));
    }
    Ok(())
}

fn validate_durations(pending: &[&Lecture]) -> Result<()> {
    match pending
        .iter()
        .find(|l| !l.duration.is_finite() || l.duration < 0.0)
    {
        Some(lecture) => Err(PlannerError::invalid_input("duration").with_reason(format!(
            "lecture {} has invalid duration {}",
            lecture.key(),
            lecture.duration
        ))),
        None => Ok(()),
    }
}
