//! Capacity configuration storage.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use crate::{
    error::{DatabaseResultExt, Result},
    models::CapacityConfig,
};

const SELECT_CONFIG_SQL: &str =
    "SELECT weekday_hours, weekend_hours, start_date FROM settings WHERE id = 1";
const UPSERT_CONFIG_SQL: &str = "INSERT INTO settings \
     (id, weekday_hours, weekend_hours, start_date, updated_at) VALUES (1, ?1, ?2, ?3, ?4) \
     ON CONFLICT (id) DO UPDATE SET weekday_hours = excluded.weekday_hours, \
     weekend_hours = excluded.weekend_hours, start_date = excluded.start_date, \
     updated_at = excluded.updated_at";

impl super::Database {
    /// Retrieves the stored configuration, if one has been saved.
    pub fn get_config(&self) -> Result<Option<CapacityConfig>> {
        self.connection
            .query_row(SELECT_CONFIG_SQL, [], |row| {
                Ok(CapacityConfig {
                    weekday_hours: row.get(0)?,
                    weekend_hours: row.get(1)?,
                    start_date: row.get(2)?,
                })
            })
            .optional()
            .db_context("Failed to query configuration")
    }

    /// Stores the configuration, replacing any previous one.
    pub fn set_config(&mut self, config: &CapacityConfig) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPSERT_CONFIG_SQL,
                params![
                    config.weekday_hours,
                    config.weekend_hours,
                    config.start_date,
                    &now
                ],
            )
            .db_context("Failed to store configuration")?;
        Ok(())
    }
}
