//! Display formatting and result wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes get newtype wrappers so the same data
//! can be shown differently depending on context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Lecture, Day)  │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `Lectures`, `DayPlans`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`hours`]: decimal hours as `H:MM`
//! - [`datetime`]: timestamps and day headings
//!
//! # Examples
//!
//! ```rust
//! use lectern_core::display::{Hours, OperationStatus};
//!
//! let status = OperationStatus::success(format!("{} hrs left", Hours(2.5)));
//! assert_eq!(status.to_string(), "✓ 2:30 hrs left\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod hours;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{DayPlans, Lectures};
pub use datetime::{DayHeading, LocalDateTime};
pub use hours::Hours;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
