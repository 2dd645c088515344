//! Lecture CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params, params_from_iter, types::Value};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Lecture, LectureFilter, NewLecture},
};

const LECTURE_COLUMNS: &str = "id, module, submodule, topic, size, duration, completed";
const INSERT_LECTURE_SQL: &str = "INSERT INTO lectures \
     (module, submodule, topic, size, duration, completed, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
// Keys match both as displayed (`3.07`) and as stored (`3.7`)
const QUERY_MATCH_SQL: &str = "(LOWER(topic) LIKE ? ESCAPE '\\' \
     OR printf('%d.%02d', module, submodule) LIKE ? ESCAPE '\\' \
     OR (module || '.' || submodule) LIKE ? ESCAPE '\\')";
const SELECT_LECTURE_SQL: &str =
    "SELECT id, module, submodule, topic, size, duration, completed FROM lectures WHERE id = ?1";
const UPDATE_COMPLETED_SQL: &str =
    "UPDATE lectures SET completed = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_ALL_COMPLETED_SQL: &str =
    "UPDATE lectures SET completed = ?1, updated_at = ?2 WHERE completed != ?1";
const DELETE_LECTURE_SQL: &str = "DELETE FROM lectures WHERE id = ?1";
const ADMISSION_ORDER_SQL: &str = "ORDER BY module, submodule, id";

impl super::Database {
    /// Helper function to construct a Lecture from a database row
    pub(super) fn build_lecture_from_row(row: &rusqlite::Row) -> rusqlite::Result<Lecture> {
        Ok(Lecture {
            id: row.get::<_, i64>(0)? as u64,
            module: row.get(1)?,
            submodule: row.get(2)?,
            topic: row.get(3)?,
            size: row.get(4)?,
            duration: row.get(5)?,
            completed: row.get(6)?,
        })
    }

    /// Inserts normalized lectures in a single transaction. Either every
    /// lecture is stored or none is.
    pub fn add_lectures(&mut self, lectures: &[NewLecture]) -> Result<Vec<Lecture>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let mut stored = Vec::with_capacity(lectures.len());
        {
            let mut stmt = tx
                .prepare(INSERT_LECTURE_SQL)
                .db_context("Failed to prepare lecture insert")?;

            for lecture in lectures {
                stmt.execute(params![
                    lecture.module,
                    lecture.submodule,
                    lecture.topic,
                    lecture.size,
                    lecture.duration,
                    lecture.completed,
                    &now,
                    &now
                ])
                .db_context("Failed to insert lecture")?;

                stored.push(Lecture {
                    id: tx.last_insert_rowid() as u64,
                    module: lecture.module,
                    submodule: lecture.submodule,
                    topic: lecture.topic.clone(),
                    size: lecture.size,
                    duration: lecture.duration,
                    completed: lecture.completed,
                });
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(stored)
    }

    /// Retrieves a lecture by its ID.
    pub fn get_lecture(&self, id: u64) -> Result<Option<Lecture>> {
        self.connection
            .query_row(SELECT_LECTURE_SQL, params![id as i64], Self::build_lecture_from_row)
            .optional()
            .db_context("Failed to query lecture")
    }

    /// Lists lectures in admission order with optional filtering.
    ///
    /// Without a filter every lecture is returned. With a filter, completed
    /// lectures are hidden unless `show_completed` is set.
    pub fn list_lectures(&self, filter: Option<&LectureFilter>) -> Result<Vec<Lecture>> {
        let mut query = format!("SELECT {LECTURE_COLUMNS} FROM lectures");
        let mut conditions = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(f) = filter {
            if !f.show_completed {
                conditions.push("completed = 0");
            }

            if let Some(module) = f.module {
                conditions.push("module = ?");
                values.push(Value::Integer(module));
            }

            if let Some(text) = f.query_text() {
                conditions.push(QUERY_MATCH_SQL);
                let pattern = format!("%{}%", escape_like(&text.to_lowercase()));
                values.extend(std::iter::repeat_n(Value::Text(pattern), 3));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push(' ');
        query.push_str(ADMISSION_ORDER_SQL);

        if let Some(limit) = filter.and_then(|f| f.limit) {
            query.push_str(" LIMIT ?");
            values.push(Value::Integer(i64::from(limit)));
        }

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare lecture query")?;

        stmt.query_map(params_from_iter(values), Self::build_lecture_from_row)
            .db_context("Failed to query lectures")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read lecture rows")
    }

    /// Marks the given lectures as completed or pending.
    ///
    /// All IDs must exist; otherwise nothing changes and
    /// `PlannerError::LectureNotFound` names the first missing one.
    pub fn set_completed(&mut self, ids: &[u64], completed: bool) -> Result<Vec<Lecture>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let mut updated = Vec::with_capacity(ids.len());
        for &id in ids {
            let rows = tx
                .execute(UPDATE_COMPLETED_SQL, params![completed, &now, id as i64])
                .db_context("Failed to update lecture")?;
            if rows == 0 {
                return Err(PlannerError::LectureNotFound { id });
            }

            let lecture = tx
                .query_row(SELECT_LECTURE_SQL, params![id as i64], Self::build_lecture_from_row)
                .db_context("Failed to reload lecture")?;
            updated.push(lecture);
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(updated)
    }

    /// Marks every lecture as completed or pending. Returns how many changed.
    pub fn set_all_completed(&mut self, completed: bool) -> Result<usize> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPDATE_ALL_COMPLETED_SQL, params![completed, &now])
            .db_context("Failed to update lectures")
    }

    /// Permanently removes the given lectures and returns them. Plan entries
    /// referring to them are removed by cascade.
    pub fn remove_lectures(&mut self, ids: &[u64]) -> Result<Vec<Lecture>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut removed = Vec::with_capacity(ids.len());
        for &id in ids {
            let lecture = tx
                .query_row(SELECT_LECTURE_SQL, params![id as i64], Self::build_lecture_from_row)
                .optional()
                .db_context("Failed to query lecture")?
                .ok_or(PlannerError::LectureNotFound { id })?;

            tx.execute(DELETE_LECTURE_SQL, params![id as i64])
                .db_context("Failed to delete lecture")?;
            removed.push(lecture);
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(removed)
    }
}

/// Escapes LIKE wildcards so user input matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
