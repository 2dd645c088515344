//! Random sample lectures.
//!
//! Useful for seeing how a plan spreads a few hundred lectures over the
//! calendar without preparing an import file.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::models::NewLecture;

/// Number of lectures added when no count is given.
pub const DEFAULT_DEMO_COUNT: usize = 100;

/// Generates `count` pending lectures with random keys in modules 1-50 and
/// submodules 1-30, sizes of 20-120 MB and durations of 0.2-1.2 hours
/// rounded to two decimals.
pub fn demo_lectures<R: Rng>(count: usize, rng: &mut R) -> Vec<NewLecture> {
    (1..=count)
        .map(|n| NewLecture {
            module: rng.random_range(1..=50),
            submodule: rng.random_range(1..=30),
            topic: format!("Demo Lecture {n}"),
            size: rng.random_range(20.0..120.0),
            duration: (rng.random_range(0.2..1.2_f64) * 100.0).round() / 100.0,
            completed: false,
        })
        .collect()
}

/// Builds the generator for a demo run.
pub fn demo_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_lectures_ranges() {
        let lectures = demo_lectures(200, &mut demo_rng(Some(42)));
        assert_eq!(lectures.len(), 200);
        assert_eq!(lectures[0].topic, "Demo Lecture 1");
        assert_eq!(lectures[199].topic, "Demo Lecture 200");

        for lecture in &lectures {
            assert!((1..=50).contains(&lecture.module));
            assert!((1..=30).contains(&lecture.submodule));
            assert!((20.0..120.0).contains(&lecture.size));
            assert!((0.2..=1.2).contains(&lecture.duration));
            assert_eq!(lecture.duration, (lecture.duration * 100.0).round() / 100.0);
            assert!(!lecture.completed);
        }
    }

    #[test]
    fn test_demo_lectures_repeat_with_seed() {
        let first = demo_lectures(20, &mut demo_rng(Some(7)));
        let second = demo_lectures(20, &mut demo_rng(Some(7)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_demo_lectures_zero() {
        assert!(demo_lectures(0, &mut demo_rng(None)).is_empty());
    }
}
