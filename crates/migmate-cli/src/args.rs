use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ListTasksArgs, ProfileCommands, ResetArgs, TaskArgs};

/// Main command-line interface for the Migmate migration planner
///
/// Migmate derives a personalised checklist and timeline for planning a
/// skilled migration to Australia. Configure a profile (visa stream, pace,
/// start date, family situation) and the tool lays out the applicable
/// stages, schedules every task, and tracks what you have ticked off.
/// It also runs as an MCP (Model Context Protocol) server for integration
/// with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "mm")]
pub struct Args {
    /// Path to the SQLite state file. Defaults to
    /// $XDG_DATA_HOME/migmate/migmate.db
    #[arg(long, global = true)]
    pub store_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Migmate CLI
///
/// Running without a command shows the full plan timeline. The other
/// commands are projections of the same derived plan (`tasks`, `next`,
/// `progress`, `resources`), mutations (`profile set`, `done`, `undo`,
/// `reset`), or the MCP server (`serve`).
#[derive(Subcommand)]
pub enum Commands {
    /// Show the full plan timeline
    #[command(alias = "p")]
    Plan,
    /// Show or edit the planning profile
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },
    /// List planned tasks with their due dates
    #[command(aliases = ["t", "ls"])]
    Tasks(ListTasksArgs),
    /// Mark a task as done
    #[command(alias = "d")]
    Done(TaskArgs),
    /// Reopen a completed task
    #[command(alias = "u")]
    Undo(TaskArgs),
    /// Show the next incomplete tasks
    #[command(alias = "n")]
    Next,
    /// Show overall and per-stage progress
    #[command(alias = "pg")]
    Progress,
    /// List reference resources for the current plan
    #[command(alias = "r")]
    Resources,
    /// Clear all completion state
    Reset(ResetArgs),
    /// Start the MCP server
    Serve,
}
