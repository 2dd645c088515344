//! Lectern CLI Application
//!
//! Command-line interface for the lectern study planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lectern_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Lectern started");

    match command {
        Some(Lecture { command }) => cli.handle_lecture_command(command).await,
        Some(Config { command }) => cli.handle_config_command(command).await,
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Export(args)) => cli.export(args).await,
        Some(Progress) => cli.progress().await,
        Some(Clear(args)) => cli.clear(args).await,
        None => cli.overview().await,
    }
}
