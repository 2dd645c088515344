use jiff::civil::{date, Date};

use super::*;

/// 2025-01-06 is a Monday.
const MONDAY: Date = date(2025, 1, 6);
/// 2025-01-04 is a Saturday.
const SATURDAY: Date = date(2025, 1, 4);

fn lecture(id: u64, module: i64, submodule: i64, duration: f64) -> Lecture {
    Lecture {
        id,
        module,
        submodule,
        topic: format!("Lecture {module}.{submodule}"),
        size: 0.0,
        duration,
        completed: false,
    }
}

fn config(weekday_hours: f64, weekend_hours: f64, start: Date) -> CapacityConfig {
    CapacityConfig {
        weekday_hours,
        weekend_hours,
        start_date: start.to_string(),
    }
}

fn keys(day: &DayPlan) -> Vec<String> {
    day.lectures.iter().map(Lecture::key).collect()
}

/// A deterministic, shuffled backlog with mixed durations and duplicate keys.
fn mixed_backlog(count: u64) -> Vec<Lecture> {
    (0..count)
        .map(|i| {
            let module = ((i * 7) % 5) as i64 + 1;
            let submodule = ((i * 11) % 4) as i64 + 1;
            let duration = [0.25, 0.5, 0.75, 1.0, 1.5, 0.1][(i % 6) as usize];
            let mut l = lecture(i + 1, module, submodule, duration);
            l.completed = i % 9 == 4;
            l
        })
        .collect()
}

#[test]
fn test_scenario_a_fills_weekdays_in_order() {
    let lectures = vec![
        lecture(1, 1, 1, 1.0),
        lecture(2, 1, 2, 1.0),
        lecture(3, 2, 1, 1.0),
    ];
    let plan = generate_from(&lectures, &config(2.0, 0.0, MONDAY), MONDAY).unwrap();

    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0].date, MONDAY);
    assert!(!plan[0].is_weekend);
    assert_eq!(keys(&plan[0]), ["1.01", "1.02"]);
    assert_eq!(plan[0].used, 2.0);
    assert_eq!(plan[0].capacity, 2.0);
    assert_eq!(plan[1].date, date(2025, 1, 7));
    assert_eq!(keys(&plan[1]), ["2.01"]);
    assert_eq!(plan[1].used, 1.0);
}

#[test]
fn test_scenario_b_all_completed_yields_empty_plan() {
    let mut lectures = vec![lecture(1, 1, 1, 1.0), lecture(2, 1, 2, 3.0)];
    for l in &mut lectures {
        l.completed = true;
    }
    let plan = generate_from(&lectures, &config(2.0, 8.0, MONDAY), MONDAY).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn test_empty_input_yields_empty_plan() {
    let plan = generate_from(&[], &config(2.0, 8.0, MONDAY), MONDAY).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn test_scenario_c_weekend_without_capacity_emits_rest_days() {
    let lectures = vec![lecture(1, 1, 1, 1.0)];
    let plan = generate_from(&lectures, &config(3.0, 0.0, SATURDAY), SATURDAY).unwrap();

    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0].date, SATURDAY);
    assert!(plan[0].is_weekend);
    assert!(plan[0].lectures.is_empty());
    assert_eq!(plan[0].used, 0.0);
    assert_eq!(plan[0].capacity, 0.0);
    assert_eq!(plan[1].date, date(2025, 1, 5));
    assert!(plan[1].is_weekend);
    assert!(plan[1].lectures.is_empty());
    assert_eq!(plan[2].date, MONDAY);
    assert!(!plan[2].is_weekend);
    assert_eq!(keys(&plan[2]), ["1.01"]);
}

#[test]
fn test_scenario_d_oversized_lecture_is_unschedulable() {
    let lectures = vec![lecture(1, 1, 1, 5.0)];
    let err = generate_from(&lectures, &config(2.0, 2.0, MONDAY), MONDAY).unwrap_err();

    match err {
        PlannerError::Unschedulable {
            key,
            duration,
            max_capacity,
        } => {
            assert_eq!(key, "1.01");
            assert_eq!(duration, 5.0);
            assert_eq!(max_capacity, 2.0);
        }
        other => panic!("expected Unschedulable, got {other:?}"),
    }
}

#[test]
fn test_oversized_lecture_after_schedulable_ones_is_unschedulable() {
    let lectures = vec![
        lecture(1, 1, 1, 1.0),
        lecture(2, 1, 2, 1.0),
        lecture(3, 2, 1, 9.0),
    ];
    let err = generate_from(&lectures, &config(2.0, 8.0, MONDAY), MONDAY).unwrap_err();
    assert!(matches!(err, PlannerError::Unschedulable { ref key, .. } if key == "2.01"));
}

#[test]
fn test_lecture_only_fitting_weekends_waits_for_saturday() {
    let lectures = vec![lecture(1, 1, 1, 5.0)];
    let plan = generate_from(&lectures, &config(2.0, 8.0, MONDAY), MONDAY).unwrap();

    assert_eq!(plan.len(), 6);
    assert!(plan[..5].iter().all(DayPlan::is_rest_day));
    assert_eq!(plan[5].date, date(2025, 1, 11));
    assert!(plan[5].is_weekend);
    assert_eq!(keys(&plan[5]), ["1.01"]);
}

#[test]
fn test_scenario_e_exact_fit_is_admitted() {
    let lectures = vec![lecture(1, 1, 1, 2.0)];
    let plan = generate_from(&lectures, &config(2.0, 2.0, MONDAY), MONDAY).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].used, 2.0);
}

#[test]
fn test_exact_fit_survives_rounding() {
    // 0.1 + 0.2 is slightly above 0.3 in binary floating point
    let lectures = vec![lecture(1, 1, 1, 0.1), lecture(2, 1, 2, 0.2)];
    let plan = generate_from(&lectures, &config(0.3, 0.3, MONDAY), MONDAY).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].lectures.len(), 2);
}

#[test]
fn test_both_capacities_non_positive_is_rejected() {
    let lectures = vec![lecture(1, 1, 1, 1.0)];
    for (weekday, weekend) in [(0.0, 0.0), (-1.0, 0.0), (-2.0, -3.0)] {
        let err = generate_from(&lectures, &config(weekday, weekend, MONDAY), MONDAY).unwrap_err();
        assert!(
            matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "capacity"),
            "unexpected error for ({weekday}, {weekend}): {err:?}"
        );
    }
}

#[test]
fn test_both_capacities_non_positive_is_rejected_even_without_pending_work() {
    let err = generate_from(&[], &config(0.0, 0.0, MONDAY), MONDAY).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));
}

#[test]
fn test_non_finite_capacity_is_rejected() {
    let err = generate_from(&[], &config(f64::NAN, 2.0, MONDAY), MONDAY).unwrap_err();
    assert!(
        matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "weekday_hours")
    );

    let err = generate_from(&[], &config(2.0, f64::INFINITY, MONDAY), MONDAY).unwrap_err();
    assert!(
        matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "weekend_hours")
    );
}

#[test]
fn test_negative_duration_is_rejected() {
    let lectures = vec![lecture(1, 1, 1, -0.5)];
    let err = generate_from(&lectures, &config(2.0, 2.0, MONDAY), MONDAY).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "duration"));
}

#[test]
fn test_invalid_duration_on_completed_lecture_is_ignored() {
    let mut broken = lecture(1, 1, 1, f64::NAN);
    broken.completed = true;
    let lectures = vec![broken, lecture(2, 1, 2, 1.0)];
    let plan = generate_from(&lectures, &config(2.0, 2.0, MONDAY), MONDAY).unwrap();
    assert_eq!(plan.len(), 1);
}

#[test]
fn test_negative_capacity_day_type_never_receives_work() {
    let lectures: Vec<Lecture> = (0..6).map(|i| lecture(i + 1, 1, i as i64, 0.0)).collect();
    let plan = generate_from(&lectures, &config(1.0, -1.0, SATURDAY), SATURDAY).unwrap();
    assert_eq!(plan.len(), 3);
    assert!(plan[0].is_rest_day());
    assert!(plan[1].is_rest_day());
    assert_eq!(plan[2].lectures.len(), 6);
}

#[test]
fn test_zero_duration_lectures_share_a_day() {
    let lectures = vec![
        lecture(1, 1, 1, 0.0),
        lecture(2, 1, 2, 0.0),
        lecture(3, 1, 3, 2.0),
    ];
    let plan = generate_from(&lectures, &config(2.0, 2.0, MONDAY), MONDAY).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].lectures.len(), 3);
}

#[test]
fn test_invalid_start_date_falls_back() {
    let lectures = vec![lecture(1, 1, 1, 1.0)];
    let mut cfg = config(2.0, 2.0, MONDAY);
    cfg.start_date = "not a date".to_string();

    let fallback = date(2025, 3, 12);
    let plan = generate_from(&lectures, &cfg, fallback).unwrap();
    assert_eq!(plan[0].date, fallback);
}

#[test]
fn test_unsorted_input_is_admitted_in_key_order() {
    let lectures = vec![
        lecture(1, 3, 1, 1.0),
        lecture(2, 1, 2, 1.0),
        lecture(3, 2, 5, 1.0),
        lecture(4, 1, 1, 1.0),
        lecture(5, 2, 1, 1.0),
    ];
    let plan = generate_from(&lectures, &config(2.0, 2.0, MONDAY), MONDAY).unwrap();
    let flat: Vec<String> = plan.iter().flat_map(keys).collect();
    assert_eq!(flat, ["1.01", "1.02", "2.01", "2.05", "3.01"]);
}

#[test]
fn test_ties_keep_input_order() {
    let lectures = vec![
        lecture(10, 1, 1, 1.0),
        lecture(4, 1, 1, 1.0),
        lecture(7, 1, 1, 1.0),
    ];
    let plan = generate_from(&lectures, &config(1.0, 1.0, MONDAY), MONDAY).unwrap();
    let ids: Vec<u64> = plan.iter().flat_map(|d| d.lectures.iter().map(|l| l.id)).collect();
    assert_eq!(ids, [10, 4, 7]);
}

#[test]
fn test_lecture_is_never_split_or_skipped() {
    // The 1.5h lecture does not fit after the first 1h one; the following
    // 0.5h lecture must wait rather than jump ahead.
    let lectures = vec![
        lecture(1, 1, 1, 1.0),
        lecture(2, 1, 2, 1.5),
        lecture(3, 1, 3, 0.5),
    ];
    let plan = generate_from(&lectures, &config(2.0, 2.0, MONDAY), MONDAY).unwrap();
    assert_eq!(keys(&plan[0]), ["1.01"]);
    assert_eq!(keys(&plan[1]), ["1.02", "1.03"]);
}

#[test]
fn test_properties_hold_for_mixed_backlog() {
    let lectures = mixed_backlog(60);
    let cfg = config(1.75, 4.0, date(2025, 1, 8));
    let plan = generate_from(&lectures, &cfg, MONDAY).unwrap();

    // Completeness and global order
    let expected: Vec<u64> = pending_in_admission_order(&lectures)
        .iter()
        .map(|l| l.id)
        .collect();
    let actual: Vec<u64> = plan
        .iter()
        .flat_map(|d| d.lectures.iter().map(|l| l.id))
        .collect();
    assert_eq!(actual, expected);
    assert!(plan.iter().flat_map(|d| &d.lectures).all(|l| !l.completed));

    // Ordering within and across days
    let order: Vec<(i64, i64)> = plan
        .iter()
        .flat_map(|d| d.lectures.iter().map(Lecture::order_key))
        .collect();
    assert!(order.windows(2).all(|w| w[0] <= w[1]));

    // Capacity respect and day type consistency
    for day in &plan {
        assert!(day.used <= day.capacity + CAPACITY_EPSILON);
        assert_eq!(day.is_weekend, is_weekend(day.date));
        assert_eq!(day.capacity, cfg.capacity_for(day.date));
        let sum: f64 = day.lectures.iter().map(|l| l.duration).sum();
        assert!((sum - day.used).abs() < 1e-12);
    }

    // Date contiguity
    assert_eq!(plan[0].date, date(2025, 1, 8));
    for pair in plan.windows(2) {
        assert_eq!(pair[0].date.tomorrow().unwrap(), pair[1].date);
    }
}

#[test]
fn test_generation_is_idempotent() {
    let lectures = mixed_backlog(40);
    let cfg = config(2.0, 6.0, MONDAY);
    let first = generate_from(&lectures, &cfg, MONDAY).unwrap();
    let second = generate_from(&lectures, &cfg, MONDAY).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_plan_ends_on_last_scheduled_day() {
    let lectures = vec![lecture(1, 1, 1, 1.0)];
    let plan = generate_from(&lectures, &config(2.0, 2.0, date(9999, 12, 31)), MONDAY).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].date, date(9999, 12, 31));
}

#[test]
fn test_running_past_calendar_end_is_an_error() {
    let lectures = vec![lecture(1, 1, 1, 2.0), lecture(2, 1, 2, 2.0)];
    let err =
        generate_from(&lectures, &config(2.0, 2.0, date(9999, 12, 31)), MONDAY).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "start_date"));
}
