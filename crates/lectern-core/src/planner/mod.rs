//! High-level planner API for lectures, capacity configuration and plans.
//!
//! [`Planner`] coordinates the application layers and the database. Every
//! operation opens the SQLite file inside `tokio::task::spawn_blocking`, so the
//! async callers never block on disk I/O.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display types) │───▶│ (lecture_ops,   │───▶│   (via db/)     │
//! │                 │    │  config_ops,    │    │                 │
//! │                 │    │  plan_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: creates [`Planner`] instances
//! - [`lecture_ops`]: import, listing, completion and removal
//! - [`config_ops`]: the stored capacity configuration
//! - [`plan_ops`]: plan generation, lookup and export
//! - [`handlers`]: the same operations wrapped in display types
//!
//! # Examples
//!
//! ```rust
//! use lectern_core::{
//!     PlannerBuilder,
//!     params::{CapacityParams, ImportLectures},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("lectern.db")))
//!     .build()
//!     .await?;
//!
//! planner
//!     .import_lectures(&ImportLectures {
//!         payload: r#"[{"module": 1, "submodule": 1, "duration": 1.5}]"#.to_string(),
//!     })
//!     .await?;
//!
//! let plan = planner
//!     .generate_plan(&CapacityParams {
//!         start_date: Some("2025-01-06".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(plan[0].lectures.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
};

pub mod builder;
pub mod config_ops;
pub mod handlers;
pub mod lecture_ops;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing lectures and study plans.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(PlannerError::join)?
    }
}
