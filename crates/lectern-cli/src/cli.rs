//! Command handlers
//!
//! [`Cli`] converts parsed arguments into core parameters, calls the planner
//! and renders the returned display types as markdown.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use lectern_core::{
    ImportLectures, OperationStatus, Planner,
    display::{DayHeading, LocalDateTime},
    models::today,
    params::{CapacityParams, ShowDay},
};
use log::info;

use crate::{
    args::{
        ClearArgs, ConfigCommands, DayArgs, ExportArgs, ImportArgs, LectureCommands, PlanCommands,
    },
    renderer::TerminalRenderer,
};

/// Runs CLI commands against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_lecture_command(&self, command: LectureCommands) -> Result<()> {
        match command {
            LectureCommands::Import(args) => self.import(args).await,
            LectureCommands::Demo(args) => {
                let result = self.planner.add_demo_lectures_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            LectureCommands::List(args) => {
                let lectures = self.planner.list_lectures_display(&args.into()).await?;
                self.renderer.render(&lectures.to_string())
            }
            LectureCommands::Show(args) => {
                let id = args.id;
                let lecture = self
                    .planner
                    .get_lecture(&args.into())
                    .await?
                    .with_context(|| format!("Lecture with ID {id} not found"))?;
                self.renderer.render(&lecture.to_string())
            }
            LectureCommands::Complete(args) => {
                let result = self.planner.set_completed_result(&args.into_params(true)).await?;
                self.renderer.render(&result.to_string())
            }
            LectureCommands::Reopen(args) => {
                let result = self.planner.set_completed_result(&args.into_params(false)).await?;
                self.renderer.render(&result.to_string())
            }
            LectureCommands::CompleteAll => {
                let status = self.planner.set_all_completed_status(true).await?;
                self.renderer.render(&status.to_string())
            }
            LectureCommands::ReopenAll => {
                let status = self.planner.set_all_completed_status(false).await?;
                self.renderer.render(&status.to_string())
            }
            LectureCommands::Remove(args) => {
                let result = self.planner.remove_lectures_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_config_command(&self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => {
                let config = self.planner.get_config().await?;
                self.renderer.render(&config.to_string())
            }
            ConfigCommands::Set(args) => {
                let params = CapacityParams::from(args);
                let result = self.planner.update_config_result(&params).await?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                let params = CapacityParams::from(args);
                let result = self
                    .planner
                    .generate_plan_result(&params)
                    .await
                    .context("Failed to generate plan")?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Show => {
                let plan = self.planner.get_plan_display().await?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Today(args) => self.day(args).await,
        }
    }

    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let bundle = self.planner.export().await?;
        let json = bundle.to_json()?;

        let Some(output) = args.output else {
            println!("{json}");
            return Ok(());
        };

        let path = if output.is_dir() {
            output.join(bundle.file_name())
        } else {
            output
        };
        fs::write(&path, format!("{json}\n"))
            .with_context(|| format!("Failed to write export to {}", path.display()))?;

        info!("Exported {} lectures to {}", bundle.items.len(), path.display());
        let status = OperationStatus::success(format!(
            "Exported {} lectures to {} at {}",
            bundle.items.len(),
            path.display(),
            LocalDateTime(&bundle.exported_at)
        ));
        self.renderer.render(&status.to_string())
    }

    pub async fn progress(&self) -> Result<()> {
        let summary = self.planner.progress().await?;
        self.renderer.render(&summary.to_string())
    }

    pub async fn clear(&self, args: ClearArgs) -> Result<()> {
        let status = self.planner.clear_all_status(&args.into()).await?;
        self.renderer.render(&status.to_string())
    }

    /// Progress followed by today's lectures.
    pub async fn overview(&self) -> Result<()> {
        self.progress().await?;
        println!();
        self.day(DayArgs::default()).await
    }

    async fn import(&self, args: ImportArgs) -> Result<()> {
        let payload = read_payload(&args.file)?;
        let result = self
            .planner
            .import_lectures_result(&ImportLectures { payload })
            .await
            .with_context(|| format!("Failed to import {}", args.file.display()))?;
        self.renderer.render(&result.to_string())
    }

    async fn day(&self, args: DayArgs) -> Result<()> {
        let params = ShowDay::from(args);
        let date = params.resolve()?;

        match self.planner.plan_for_day(&params).await? {
            Some(day) => self.renderer.render(&day.to_string()),
            None => {
                let hint = if date == today() {
                    "Nothing planned for today. Run `lectern plan generate` to build a plan."
                } else {
                    "Nothing planned for this day."
                };
                self.renderer
                    .render(&format!("## {}\n\n{hint}\n", DayHeading(date)))
            }
        }
    }
}

/// Reads an import payload from a file, or from standard input for `-`.
fn read_payload(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut payload = String::new();
        io::stdin()
            .read_to_string(&mut payload)
            .context("Failed to read lectures from standard input")?;
        return Ok(payload);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
