//! Migmate CLI Application
//!
//! Command-line interface for the Migmate migration planning tool.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, MigmateMcpServer};
use migmate_core::PlannerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        store_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_store_path(store_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Migmate started");

    if matches!(command, Some(Serve)) {
        info!("Starting Migmate MCP server");
        return run_stdio_server(MigmateMcpServer::new(planner))
            .await
            .context("MCP server failed");
    }

    let cli = Cli::new(planner, renderer);
    match command {
        // Serve returned above; falling through here would just print the plan
        Some(Plan) | Some(Serve) | None => cli.show_plan().await,
        Some(Profile { command }) => cli.handle_profile_command(command).await,
        Some(Tasks(args)) => cli.list_tasks(args).await,
        Some(Done(args)) => cli.complete_task(args).await,
        Some(Undo(args)) => cli.reopen_task(args).await,
        Some(Next) => cli.next_steps().await,
        Some(Progress) => cli.progress().await,
        Some(Resources) => cli.resources().await,
        Some(Reset(args)) => cli.reset_completion(args).await,
    }
}
