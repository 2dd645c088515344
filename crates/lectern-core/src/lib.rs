//! Core library for the Lectern study planner.
//!
//! Lectern turns a backlog of recorded lectures into a day-by-day viewing
//! plan. Lectures are imported from loosely typed JSON, stored in SQLite, and
//! scheduled greedily in `(module, submodule)` order against separate weekday
//! and weekend hour budgets.
//!
//! - [`schedule`]: the pure scheduling function
//! - [`import`] / [`export`]: JSON ingestion and backup bundles
//! - [`demo`]: random sample lectures for trying out a large plan
//! - [`db`]: SQLite storage for lectures, configuration and the last plan
//! - [`planner`]: async operations over the store
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use lectern_core::{
//!     PlannerBuilder,
//!     display::DayPlans,
//!     params::{CapacityParams, ImportLectures},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("lectern.db"))
//!     .build()
//!     .await?;
//!
//! planner
//!     .import_lectures(&ImportLectures {
//!         payload: r#"[{"module": 1, "submodule": 1, "title": "Intro", "duration_hr": "0.5"}]"#
//!             .to_string(),
//!     })
//!     .await?;
//!
//! let plan = planner.generate_plan(&CapacityParams::default()).await?;
//! println!("{}", DayPlans(plan));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod demo;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DayPlans, DeleteResult, Hours, Lectures, OperationStatus, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use export::ExportBundle;
pub use models::{
    CapacityConfig, CapacityOverrides, DayPlan, Lecture, LectureFilter, NewLecture,
    ProgressSummary,
};
pub use params::{
    AddDemoLectures, CapacityParams, ClearAll, Id, ImportLectures, ListLectures, RemoveLectures,
    SetCompleted, ShowDay,
};
pub use planner::{Planner, PlannerBuilder};
