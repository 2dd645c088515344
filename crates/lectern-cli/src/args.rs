//! Command-line argument definitions using clap
//!
//! Each command has a clap-derived argument struct that converts into the
//! framework-free parameter type from `lectern_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Help text and flag parsing stay here; validation of values (negative
//! hours, unknown IDs, unparseable dates) happens in the core.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use lectern_core::params::{
    AddDemoLectures, CapacityParams, ClearAll, Id, ListLectures, RemoveLectures, SetCompleted,
    ShowDay,
};

/// Plan your way through a backlog of recorded lectures
///
/// Lectern imports lectures from JSON, tracks which ones you have watched and
/// spreads the rest over the coming days according to how many hours you have
/// on weekdays and weekends.
#[derive(Parser)]
#[command(version, about, name = "lectern")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lectern/lectern.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, progress and today's lectures are
/// shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Import, list and mark lectures
    #[command(alias = "l")]
    Lecture {
        #[command(subcommand)]
        command: LectureCommands,
    },
    /// Show or change the hour budget and start date
    #[command(alias = "c")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate and view the study plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Write lectures, configuration and plan as one JSON document
    Export(ExportArgs),
    /// Show completion totals
    Progress,
    /// Remove all lectures, the plan and the configuration
    Clear(ClearArgs),
}

// ============================================================================
// Lecture commands
// ============================================================================

#[derive(Subcommand)]
pub enum LectureCommands {
    /// Import lectures from a JSON file
    #[command(alias = "i")]
    Import(ImportArgs),
    /// Add randomly generated sample lectures
    Demo(DemoArgs),
    /// List lectures in study order
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show a single lecture
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Mark lectures as watched
    #[command(alias = "done")]
    Complete(CompletionArgs),
    /// Mark lectures as not watched
    #[command(alias = "undo")]
    Reopen(CompletionArgs),
    /// Mark every lecture as watched
    CompleteAll,
    /// Mark every lecture as not watched
    ReopenAll,
    /// Permanently remove lectures
    #[command(alias = "rm")]
    Remove(RemoveArgs),
}

/// Import lectures from a JSON array of records
///
/// Records accept `module`, `submodule`, `topic` (or `title`), `size` (or
/// `size_mb`), `duration` (or `duration_hr`, in hours) and `completed`.
/// Numbers may be given as strings. A bad record rejects the whole file.
#[derive(ClapArgs)]
pub struct ImportArgs {
    /// JSON file to import, or `-` for standard input
    pub file: PathBuf,
}

#[derive(ClapArgs)]
pub struct DemoArgs {
    /// Number of lectures to add
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,
    /// Seed for a repeatable set of lectures
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<DemoArgs> for AddDemoLectures {
    fn from(val: DemoArgs) -> Self {
        AddDemoLectures {
            count: val.count,
            seed: val.seed,
        }
    }
}

#[derive(ClapArgs)]
pub struct ListArgs {
    /// Match topic text or `module.submodule`
    #[arg(short, long)]
    pub query: Option<String>,
    /// Include watched lectures
    #[arg(short, long)]
    pub all: bool,
    /// Only lectures of this module
    #[arg(short, long)]
    pub module: Option<i64>,
    /// Show at most this many lectures
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,
}

impl From<ListArgs> for ListLectures {
    fn from(val: ListArgs) -> Self {
        ListLectures {
            query: val.query,
            all: val.all,
            module: val.module,
            limit: val.limit,
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// ID of the lecture
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct CompletionArgs {
    /// IDs of the lectures
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<u64>,
}

impl CompletionArgs {
    /// Converts into core parameters with the given completion flag.
    pub fn into_params(self, completed: bool) -> SetCompleted {
        SetCompleted {
            ids: self.ids,
            completed,
        }
    }
}

#[derive(ClapArgs)]
pub struct RemoveArgs {
    /// IDs of the lectures to remove
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<u64>,
    /// Confirm permanent removal
    #[arg(long)]
    pub confirm: bool,
}

impl From<RemoveArgs> for RemoveLectures {
    fn from(val: RemoveArgs) -> Self {
        RemoveLectures {
            ids: val.ids,
            confirmed: val.confirm,
        }
    }
}

// ============================================================================
// Config and plan commands
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the stored configuration
    #[command(alias = "s")]
    Show,
    /// Change one or more settings
    Set(CapacityArgs),
}

/// Hour budgets and start date. Omitted values keep their stored setting.
#[derive(ClapArgs, Default)]
pub struct CapacityArgs {
    /// Hours available Monday through Friday
    #[arg(long, value_name = "HOURS", allow_negative_numbers = true)]
    pub weekday: Option<f64>,
    /// Hours available on Saturday and Sunday
    #[arg(long, value_name = "HOURS", allow_negative_numbers = true)]
    pub weekend: Option<f64>,
    /// First day of the plan (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,
}

impl From<CapacityArgs> for CapacityParams {
    fn from(val: CapacityArgs) -> Self {
        CapacityParams {
            weekday_hours: val.weekday,
            weekend_hours: val.weekend,
            start_date: val.start,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a new plan for all pending lectures
    ///
    /// Flags override the stored configuration for this plan only.
    #[command(alias = "g")]
    Generate(CapacityArgs),
    /// Show the last generated plan
    #[command(alias = "s")]
    Show,
    /// Show the lectures planned for one day
    #[command(alias = "t")]
    Today(DayArgs),
}

#[derive(ClapArgs, Default)]
pub struct DayArgs {
    /// Day to show (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

impl From<DayArgs> for ShowDay {
    fn from(val: DayArgs) -> Self {
        ShowDay { date: val.date }
    }
}

// ============================================================================
// Top-level commands
// ============================================================================

#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Output file or directory. Prints to standard output when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs)]
pub struct ClearArgs {
    /// Confirm removal of all data
    #[arg(long)]
    pub confirm: bool,
}

impl From<ClearArgs> for ClearAll {
    fn from(val: ClearArgs) -> Self {
        ClearAll {
            confirmed: val.confirm,
        }
    }
}
