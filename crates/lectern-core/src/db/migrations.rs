//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Version stamped into `PRAGMA user_version` once the schema is applied.
pub const SCHEMA_VERSION: i64 = 2;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Plan entries cascade away with their lecture
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Reads the stored schema version.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }

    /// Brings databases created by older builds up to [`SCHEMA_VERSION`].
    ///
    /// A version of 0 means the schema file has just created every table, so
    /// only the stamp is written.
    fn apply_migrations(&self) -> Result<()> {
        let version = self.schema_version()?;
        if version == 1 {
            // Version 1 plans have no day sequence; rebuild it from the stored dates
            self.connection
                .execute_batch(
                    "ALTER TABLE plan_days ADD COLUMN seq INTEGER NOT NULL DEFAULT 0; \
                     UPDATE plan_days SET seq = \
                         (SELECT COUNT(*) FROM plan_days p WHERE p.day_date < plan_days.day_date);",
                )
                .db_context("Failed to add plan day sequence")?;
        }
        if version < SCHEMA_VERSION {
            self.connection
                .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
                .db_context("Failed to record schema version")?;
        }
        Ok(())
    }
}
