#![allow(dead_code)]

use lectern_core::{ImportLectures, Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// A small course: two modules, mixed record shapes, one lecture watched.
pub const COURSE_JSON: &str = r#"[
    {"module": 1, "submodule": 1, "topic": "Welcome", "size": 12.5, "duration": 0.5},
    {"module": "1", "submodule": "2", "title": "Tooling", "size_mb": "80", "duration_hr": "1.25"},
    {"module": 1, "submodule": 3, "topic": "Hello world", "duration": 0.75, "completed": "yes"},
    {"module": 2, "submodule": 1, "topic": "Ownership", "duration": 2},
    {"module": 2, "submodule": 2, "topic": "Borrowing", "duration": 1.5},
    {"module": 3, "submodule": 1, "topic": "Traits", "duration": 3}
]"#;

/// Imports [`COURSE_JSON`] into `planner`.
pub async fn import_course(planner: &Planner) {
    planner
        .import_lectures(&ImportLectures {
            payload: COURSE_JSON.to_string(),
        })
        .await
        .expect("Failed to import course");
}
