//! Derived plan models: the scheduled form of stages and tasks.
//!
//! These types are ephemeral projections. They are rebuilt from scratch by
//! [`crate::plan::derive_plan`] on every input change and never persisted.

use jiff::civil::Date;

use super::catalogue::{Resource, TaskBlueprint, TaskLink};
use super::progress::{CompletionMap, ProgressReport};

/// A catalogue stage after filtering and date layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStage {
    /// Catalogue stage identifier
    pub id: &'static str,

    /// Display title of the stage
    pub title: &'static str,

    /// One-paragraph summary
    pub summary: &'static str,

    /// Milestone reached when the stage completes
    pub milestone: &'static str,

    /// Catalogue duration before the pace multiplier
    pub nominal_weeks: u32,

    /// Duration after the pace multiplier, floored at one week
    pub duration_weeks: u32,

    /// First day of the stage window
    pub starts_on: Date,

    /// Day the window ends and the next stage begins
    pub ends_on: Date,

    /// Tasks surviving the profile filter, in catalogue order
    pub tasks: Vec<TaskBlueprint>,

    /// Reference material carried over from the blueprint
    pub resources: Vec<Resource>,
}

/// A task after scheduling, carrying its stage context and due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTask {
    /// Catalogue task identifier
    pub id: &'static str,

    /// Brief title of the task
    pub title: &'static str,

    /// Optional longer explanation
    pub detail: Option<&'static str>,

    /// Optional external reference
    pub link: Option<TaskLink>,

    /// Identifier of the owning stage
    pub stage_id: &'static str,

    /// Title of the owning stage
    pub stage_title: &'static str,

    /// Position of the owning stage in the planned sequence (0-indexed)
    pub stage_index: usize,

    /// First day of the owning stage's window
    pub window_starts: Date,

    /// Last day of the owning stage's window
    pub window_ends: Date,

    /// Suggested due date, always within the stage window
    pub due_on: Date,

    /// Whether the completion map marks this task done
    pub done: bool,
}

/// The complete derived view of a plan.
///
/// Everything a shell needs to render: the staged timeline, the flat task
/// list in canonical order, aggregate progress, and deduplicated resources.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanView {
    /// Included stages with their date windows, in catalogue order
    pub stages: Vec<PlannedStage>,

    /// All planned tasks, flattened in stage then task order
    pub tasks: Vec<PlannedTask>,

    /// Aggregate and per-stage progress
    pub progress: ProgressReport,

    /// Stage resources, deduplicated by URL
    pub resources: Vec<Resource>,

    /// Sum of all adjusted stage durations
    pub total_weeks: u32,

    /// Completion state the view was derived from
    pub completion: CompletionMap,
}

impl PlanView {
    /// Look up a planned task by its catalogue id.
    pub fn task(&self, id: &str) -> Option<&PlannedTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Look up a planned stage by its catalogue id.
    pub fn stage(&self, id: &str) -> Option<&PlannedStage> {
        self.stages.iter().find(|s| s.id == id)
    }
}
