//! Blueprint types for the static stage and task catalogue.

use super::Profile;

/// Applicability condition evaluated against a profile snapshot.
///
/// Predicates are total, side-effect-free functions carried in the
/// catalogue data itself. They are business data: two entries may repeat
/// the same condition on purpose, and such repeats are not unified.
pub type Predicate = fn(&Profile) -> bool;

/// External link attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLink {
    /// Short label shown next to the task
    pub label: &'static str,

    /// Opaque URL, never fetched or validated
    pub url: &'static str,
}

/// A single checklist item definition within a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskBlueprint {
    /// Globally unique identifier, stable across catalogue revisions
    pub id: &'static str,

    /// Brief title of the task
    pub title: &'static str,

    /// Optional longer explanation
    pub detail: Option<&'static str>,

    /// Optional external reference
    pub link: Option<TaskLink>,

    /// Applicability condition; a task without one always applies
    pub applies: Option<Predicate>,
}

/// A reference resource attached to a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Display title of the resource
    pub title: &'static str,

    /// One-line description
    pub description: &'static str,

    /// URL, used as the deduplication key
    pub url: &'static str,

    /// Coarse grouping tag for display
    pub category: &'static str,
}

/// A stage definition in the fixed catalogue.
///
/// Catalogue order is the canonical stage sequence; the planner never
/// reorders stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageBlueprint {
    /// Unique identifier within the catalogue
    pub id: &'static str,

    /// Display title of the stage
    pub title: &'static str,

    /// One-paragraph summary of what the stage covers
    pub summary: &'static str,

    /// Nominal duration in weeks, before the pace multiplier
    pub duration_weeks: u32,

    /// Milestone reached when the stage completes
    pub milestone: &'static str,

    /// Stage-level applicability condition
    pub applies: Predicate,

    /// Ordered task definitions
    pub tasks: Vec<TaskBlueprint>,

    /// Reference material attached at the stage level
    pub resources: Vec<Resource>,
}
