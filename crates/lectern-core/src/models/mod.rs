//! Data models for lectures, capacity configuration and day plans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures and presentation stay
//! separate.
//!
//! # Examples
//!
//! ```rust
//! use lectern_core::models::{CapacityConfig, Lecture};
//!
//! let lecture = Lecture {
//!     id: 1,
//!     module: 3,
//!     submodule: 7,
//!     topic: "Ownership".to_string(),
//!     size: 120.0,
//!     duration: 0.75,
//!     completed: false,
//! };
//! assert_eq!(lecture.key(), "3.07");
//!
//! let config = CapacityConfig {
//!     weekday_hours: 2.0,
//!     weekend_hours: 8.0,
//!     start_date: "2025-01-06".to_string(),
//! };
//! assert_eq!(config.max_capacity(), 8.0);
//! ```

pub mod config;
pub mod day_plan;
pub mod filters;
pub mod lecture;
pub mod requests;
pub mod summary;


pub use config::{is_weekend, today, CapacityConfig};
pub use day_plan::DayPlan;
pub use filters::LectureFilter;
pub use lecture::{format_key, Lecture, NewLecture};
pub use requests::CapacityOverrides;
pub use summary::ProgressSummary;
