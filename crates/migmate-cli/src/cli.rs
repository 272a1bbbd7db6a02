//! Command handlers and CLI argument wrappers.
//!
//! This module implements the parameter wrapper pattern for the CLI side:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! The argument structs carry clap-specific attributes (flags, help text,
//! value parsing) and convert into the framework-free parameter types in
//! `migmate_core::params` via `From` implementations. Enumerated fields
//! travel as plain strings; the core's validation rejects unknown
//! spellings with a message listing the accepted ones, so the CLI never
//! duplicates that knowledge.
//!
//! The [`Cli`] struct pairs a [`Planner`] with a [`TerminalRenderer`] and
//! exposes one async method per command.

use anyhow::Result;
use clap::{Args, Subcommand};
use migmate_core::params::{ListTasks, ResetCompletion, ResetProfile, TaskRef, UpdateProfile};
use migmate_core::Planner;

use crate::renderer::TerminalRenderer;

/// Set one or more profile fields
///
/// Only the fields you pass change; everything else keeps its current
/// value. The whole profile is persisted after a successful update.
#[derive(Args)]
pub struct SetProfileArgs {
    /// Visa stream: 189, 190, 491, partner, or graduate
    #[arg(long)]
    pub visa_stream: Option<String>,
    /// Timeline pace: accelerated, standard, or relaxed
    #[arg(long)]
    pub pace: Option<String>,
    /// Plan start date as YYYY-MM-DD; pass an empty string to clear it
    #[arg(long)]
    pub start_date: Option<String>,
    /// Destination: a state/territory code (nsw, vic, ...) or national
    #[arg(long)]
    pub state: Option<String>,
    /// English test: ielts, pte, toefl, cambridge, or none
    #[arg(long)]
    pub english_test: Option<String>,
    /// Whether a partner is included in the application
    #[arg(long)]
    pub partner: Option<bool>,
    /// Whether an English test still needs to be sat
    #[arg(long)]
    pub english_exam: Option<bool>,
    /// Whether children are included in the application
    #[arg(long)]
    pub children: Option<bool>,
}

impl From<SetProfileArgs> for UpdateProfile {
    fn from(val: SetProfileArgs) -> Self {
        UpdateProfile {
            visa_stream: val.visa_stream,
            pace: val.pace,
            start_date: val.start_date,
            relocating_state: val.state,
            english_test: val.english_test,
            has_partner: val.partner,
            needs_english_exam: val.english_exam,
            has_children: val.children,
        }
    }
}

/// Address a single task by its catalogue id
#[derive(Args)]
pub struct TaskArgs {
    /// Catalogue id of the task (shown in task listings, e.g. settle-tfn)
    pub id: String,
}

impl From<TaskArgs> for TaskRef {
    fn from(val: TaskArgs) -> Self {
        TaskRef { id: val.id }
    }
}

/// List planned tasks
#[derive(Args, Default)]
pub struct ListTasksArgs {
    /// Restrict the list to one stage by its id (e.g. foundations)
    #[arg(long)]
    pub stage: Option<String>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks { stage: val.stage }
    }
}

/// Confirm a destructive reset
#[derive(Args)]
pub struct ResetArgs {
    /// Confirm the reset (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

impl From<ResetArgs> for ResetCompletion {
    fn from(val: ResetArgs) -> Self {
        ResetCompletion {
            confirmed: val.confirm,
        }
    }
}

impl From<ResetArgs> for ResetProfile {
    fn from(val: ResetArgs) -> Self {
        ResetProfile {
            confirmed: val.confirm,
        }
    }
}

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the current profile
    #[command(alias = "s")]
    Show,
    /// Set one or more profile fields
    Set(SetProfileArgs),
    /// Restore the default profile
    Reset(ResetArgs),
}

/// Command handler pairing the planner with a terminal renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Show the full plan timeline.
    pub async fn show_plan(&self) -> Result<()> {
        let view = self.planner.plan().await?;
        self.renderer.render(&view.to_string())
    }

    /// Dispatch a profile subcommand; no subcommand shows the profile.
    pub async fn handle_profile_command(&self, command: Option<ProfileCommands>) -> Result<()> {
        match command {
            None | Some(ProfileCommands::Show) => self.show_profile().await,
            Some(ProfileCommands::Set(args)) => self.set_profile(args).await,
            Some(ProfileCommands::Reset(args)) => self.reset_profile(args).await,
        }
    }

    /// Show the current profile.
    pub async fn show_profile(&self) -> Result<()> {
        let profile = self.planner.profile().await?;
        self.renderer.render(&profile.to_string())
    }

    /// Apply profile field updates.
    pub async fn set_profile(&self, args: SetProfileArgs) -> Result<()> {
        let outcome = self.planner.update_profile(&args.into()).await?;
        self.renderer.render(&outcome.to_string())
    }

    /// Restore the default profile.
    pub async fn reset_profile(&self, args: ResetArgs) -> Result<()> {
        let profile = self.planner.reset_profile(&args.into()).await?;
        let mut output = String::from("Profile restored to defaults.\n\n");
        output.push_str(&profile.to_string());
        self.renderer.render(&output)
    }

    /// List planned tasks, optionally restricted to one stage.
    pub async fn list_tasks(&self, args: ListTasksArgs) -> Result<()> {
        let tasks = self.planner.tasks(&args.into()).await?;
        self.renderer.render(&tasks.to_string())
    }

    /// Mark a task as done.
    pub async fn complete_task(&self, args: TaskArgs) -> Result<()> {
        let outcome = self.planner.complete_task(&args.into()).await?;
        self.renderer.render(&outcome.to_string())
    }

    /// Reopen a completed task.
    pub async fn reopen_task(&self, args: TaskArgs) -> Result<()> {
        let outcome = self.planner.reopen_task(&args.into()).await?;
        self.renderer.render(&outcome.to_string())
    }

    /// Show the next incomplete tasks.
    pub async fn next_steps(&self) -> Result<()> {
        let next = self.planner.next_steps().await?;
        self.renderer.render(&next.to_string())
    }

    /// Show overall and per-stage progress.
    pub async fn progress(&self) -> Result<()> {
        let report = self.planner.progress().await?;
        let output = format!("# Progress\n\n{report}");
        self.renderer.render(&output)
    }

    /// List reference resources for the current plan.
    pub async fn resources(&self) -> Result<()> {
        let resources = self.planner.resources().await?;
        self.renderer.render(&resources.to_string())
    }

    /// Clear all completion state.
    pub async fn reset_completion(&self, args: ResetArgs) -> Result<()> {
        let outcome = self.planner.reset_completion(&args.into()).await?;
        self.renderer.render(&outcome.to_string())
    }
}
