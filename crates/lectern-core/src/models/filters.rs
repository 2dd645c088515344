//! Filter types for querying lectures.

/// Filter options for listing lectures.
#[derive(Debug, Clone, Default)]
pub struct LectureFilter {
    /// Case-insensitive match on the topic, or substring match on the key
    /// either as displayed (`3.07`) or unpadded (`3.7`)
    pub query: Option<String>,

    /// Include completed lectures
    pub show_completed: bool,

    /// Restrict to a single module
    pub module: Option<i64>,

    /// Maximum number of lectures to return
    pub limit: Option<u32>,
}

impl LectureFilter {
    /// Trimmed, non-empty query text.
    pub fn query_text(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

impl From<&crate::params::ListLectures> for LectureFilter {
    fn from(params: &crate::params::ListLectures) -> Self {
        Self {
            query: params.query.clone(),
            show_completed: params.all,
            module: params.module,
            limit: params.limit,
        }
    }
}
