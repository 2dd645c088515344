//! Export bundle for progress backups.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{CapacityConfig, DayPlan, Lecture},
};

/// Everything the planner knows, serialized as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    /// All stored lectures in admission order
    pub items: Vec<Lecture>,
    /// Current capacity configuration
    pub config: CapacityConfig,
    /// Last generated plan
    pub plan: Vec<DayPlan>,
    /// When the bundle was produced (UTC, RFC 3339)
    pub exported_at: Timestamp,
}

impl ExportBundle {
    /// Creates a bundle stamped with the current time.
    pub fn new(items: Vec<Lecture>, config: CapacityConfig, plan: Vec<DayPlan>) -> Self {
        Self {
            items,
            config,
            plan,
            exported_at: Timestamp::now(),
        }
    }

    /// Pretty-printed JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested file name, e.g. `lectern_export_20250106T093000Z.json`.
    pub fn file_name(&self) -> String {
        format!("lectern_export_{}.json", self.exported_at.strftime("%Y%m%dT%H%M%SZ"))
    }
}
