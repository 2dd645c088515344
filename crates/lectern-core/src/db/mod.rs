//! Database operations and SQLite management for lectures, configuration and
//! the generated plan.
//!
//! This module provides low-level database operations for the Lectern study
//! planner. It handles SQLite connections and schema management, and exposes
//! specialized query interfaces for each store.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod config_queries;
pub mod lecture_queries;
pub mod migrations;
pub mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Removes every lecture, the stored plan and the stored configuration.
    pub fn clear_all(&mut self) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute_batch(
            "DELETE FROM plan_entries; DELETE FROM plan_days; \
             DELETE FROM lectures; DELETE FROM settings;",
        )
        .db_context("Failed to clear stored data")?;

        tx.commit().db_context("Failed to commit transaction")
    }
}
