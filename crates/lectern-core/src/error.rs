//! Error types for the planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Lecture not found for the given ID
    #[error("Lecture with ID {id} not found")]
    LectureNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Rejected import payload; nothing was written
    #[error("Import failed: {reason}")]
    Import { reason: String },
    /// A pending lecture does not fit into any day type
    #[error("Cannot schedule lecture {key}: needs {duration}h, longest day has {max_capacity}h")]
    Unschedulable {
        key: String,
        duration: f64,
        max_capacity: f64,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an import error for the record at `index`.
    pub fn import_record(index: usize, reason: impl std::fmt::Display) -> Self {
        Self::Import {
            reason: format!("record {index}: {reason}"),
        }
    }

    /// Error for a `spawn_blocking` task that panicked or was cancelled.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlannerError::invalid_input("weekday_hours").with_reason("must be finite");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'weekday_hours': must be finite"
        );
    }

    #[test]
    fn test_import_record_names_index() {
        let err = PlannerError::import_record(3, "missing module");
        assert_eq!(err.to_string(), "Import failed: record 3: missing module");
    }

    #[test]
    fn test_unschedulable_message() {
        let err = PlannerError::Unschedulable {
            key: "1.01".to_string(),
            duration: 5.0,
            max_capacity: 2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("1.01"));
        assert!(msg.contains("5h"));
        assert!(msg.contains("2h"));
    }

    #[test]
    fn test_db_context_wraps_source() {
        let res: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = res.db_context("Failed to load lecture").unwrap_err();
        assert!(matches!(err, PlannerError::Database { .. }));
        assert!(err.to_string().contains("Failed to load lecture"));
    }
}
