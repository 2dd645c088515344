//! Storage for the last generated plan.

use jiff::civil::Date;
use rusqlite::{OptionalExtension, params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result},
    models::DayPlan,
};

const DELETE_PLAN_ENTRIES_SQL: &str = "DELETE FROM plan_entries";
const DELETE_PLAN_DAYS_SQL: &str = "DELETE FROM plan_days";
const INSERT_PLAN_DAY_SQL: &str =
    "INSERT INTO plan_days (day_date, seq, is_weekend, capacity, used) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_PLAN_ENTRY_SQL: &str =
    "INSERT INTO plan_entries (day_date, position, lecture_id) VALUES (?1, ?2, ?3)";
// Days are read back in generation order; the text form of a date does not
// sort chronologically before year 0.
const SELECT_PLAN_DAYS_SQL: &str =
    "SELECT day_date, is_weekend, capacity, used FROM plan_days ORDER BY seq";
const SELECT_PLAN_DAY_SQL: &str =
    "SELECT day_date, is_weekend, capacity, used FROM plan_days WHERE day_date = ?1";
const SELECT_DAY_LECTURES_SQL: &str =
    "SELECT l.id, l.module, l.submodule, l.topic, l.size, l.duration, l.completed \
     FROM plan_entries e JOIN lectures l ON l.id = e.lecture_id \
     WHERE e.day_date = ?1 ORDER BY e.position";

impl super::Database {
    /// Helper function to construct a DayPlan (without lectures) from a row
    fn build_day_from_row(row: &rusqlite::Row) -> rusqlite::Result<DayPlan> {
        let date = row
            .get::<_, String>(0)?
            .parse::<Date>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

        Ok(DayPlan {
            date,
            is_weekend: row.get(1)?,
            capacity: row.get(2)?,
            used: row.get(3)?,
            lectures: Vec::new(),
        })
    }

    /// Replaces the stored plan with `plan` in one transaction.
    pub fn replace_plan(&mut self, plan: &[DayPlan]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_PLAN_ENTRIES_SQL, [])
            .db_context("Failed to clear plan entries")?;
        tx.execute(DELETE_PLAN_DAYS_SQL, [])
            .db_context("Failed to clear plan days")?;

        {
            let mut insert_day = tx
                .prepare(INSERT_PLAN_DAY_SQL)
                .db_context("Failed to prepare plan day insert")?;
            let mut insert_entry = tx
                .prepare(INSERT_PLAN_ENTRY_SQL)
                .db_context("Failed to prepare plan entry insert")?;

            for (seq, day) in plan.iter().enumerate() {
                let day_date = day.date.to_string();
                insert_day
                    .execute(params![
                        &day_date,
                        seq as i64,
                        day.is_weekend,
                        day.capacity,
                        day.used
                    ])
                    .db_context("Failed to insert plan day")?;

                for (position, lecture) in day.lectures.iter().enumerate() {
                    insert_entry
                        .execute(params![&day_date, position as i64, lecture.id as i64])
                        .db_context("Failed to insert plan entry")?;
                }
            }
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Retrieves the stored plan. Lectures are read from the item store, so
    /// completion flags reflect their current state.
    pub fn get_plan(&self) -> Result<Vec<DayPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_DAYS_SQL)
            .db_context("Failed to prepare plan query")?;

        let mut days = stmt
            .query_map([], Self::build_day_from_row)
            .db_context("Failed to query plan days")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan days")?;

        for day in &mut days {
            day.lectures = self.get_day_lectures(day.date)?;
        }
        Ok(days)
    }

    /// Retrieves the stored plan for a single date.
    pub fn get_plan_day(&self, date: Date) -> Result<Option<DayPlan>> {
        let day = self
            .connection
            .query_row(
                SELECT_PLAN_DAY_SQL,
                params![date.to_string()],
                Self::build_day_from_row,
            )
            .optional()
            .db_context("Failed to query plan day")?;

        match day {
            Some(mut day) => {
                day.lectures = self.get_day_lectures(day.date)?;
                Ok(Some(day))
            }
            None => Ok(None),
        }
    }

    fn get_day_lectures(&self, date: Date) -> Result<Vec<crate::models::Lecture>> {
        let mut stmt = self
            .connection
            .prepare_cached(SELECT_DAY_LECTURES_SQL)
            .db_context("Failed to prepare plan entry query")?;

        stmt.query_map(params![date.to_string()], Self::build_lecture_from_row)
            .db_context("Failed to query plan entries")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan entries")
    }
}
