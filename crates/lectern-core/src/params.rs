//! Parameter structures for Lectern operations
//!
//! These structures are shared by every interface without framework-specific
//! derives. Interface layers (the CLI today) define their own argument types
//! and convert into these via `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct ListArgs {
//!     #[arg(short, long)]
//!     pub query: Option<String>,
//! }
//!
//! impl From<ListArgs> for ListLectures {
//!     fn from(args: ListArgs) -> Self {
//!         ListLectures { query: args.query, ..Default::default() }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::CapacityOverrides;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the lecture to operate on
    pub id: u64,
}

/// Parameters for importing lectures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportLectures {
    /// JSON array of lecture records
    pub payload: String,
}

/// Parameters for listing lectures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLectures {
    /// Topic or `module.submodule` search text
    pub query: Option<String>,
    /// Include completed lectures
    #[serde(default)]
    pub all: bool,
    /// Restrict to one module
    pub module: Option<i64>,
    /// Maximum number of lectures to return
    pub limit: Option<u32>,
}

/// Parameters for marking lectures completed or pending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetCompleted {
    /// Lectures to update; all must exist
    pub ids: Vec<u64>,
    /// New completion flag
    pub completed: bool,
}

/// Parameters for permanently removing lectures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveLectures {
    pub ids: Vec<u64>,
    /// Must be true; removal cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for wiping every lecture, the plan and the configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearAll {
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for seeding the store with random sample lectures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDemoLectures {
    /// Number of lectures to add
    pub count: usize,
    /// Fixed seed for a repeatable set; random when omitted
    pub seed: Option<u64>,
}

impl Default for AddDemoLectures {
    fn default() -> Self {
        Self {
            count: crate::demo::DEFAULT_DEMO_COUNT,
            seed: None,
        }
    }
}

/// Capacity fields for `config set` and one-off plan generation.
///
/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapacityParams {
    /// Hours available Monday through Friday
    pub weekday_hours: Option<f64>,
    /// Hours available on Saturday and Sunday
    pub weekend_hours: Option<f64>,
    /// First scheduled day, `YYYY-MM-DD`
    pub start_date: Option<String>,
}

impl From<&CapacityParams> for CapacityOverrides {
    fn from(params: &CapacityParams) -> Self {
        Self {
            weekday_hours: params.weekday_hours,
            weekend_hours: params.weekend_hours,
            start_date: params.start_date.clone(),
        }
    }
}

/// Parameters for showing the plan of a single day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowDay {
    /// `YYYY-MM-DD`; today when omitted
    pub date: Option<String>,
}

impl ShowDay {
    /// Parses the requested date, defaulting to today.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when `date` is not a calendar date.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lectern_core::params::ShowDay;
    ///
    /// let params = ShowDay { date: Some("2025-01-06".to_string()) };
    /// assert_eq!(params.resolve()?.to_string(), "2025-01-06");
    ///
    /// let params = ShowDay { date: Some("someday".to_string()) };
    /// assert!(params.resolve().is_err());
    /// # Ok::<(), lectern_core::PlannerError>(())
    /// ```
    pub fn resolve(&self) -> crate::Result<jiff::civil::Date> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(crate::models::today()),
            Some(text) => text.parse::<jiff::civil::Date>().map_err(|e| {
                crate::PlannerError::invalid_input("date")
                    .with_reason(format!("'{text}' is not a YYYY-MM-DD date: {e}"))
            }),
        }
    }
}
