//! Outcome wrapper types for displaying operation results.
//!
//! Each mutation on the planner returns one of these, pairing the data the
//! operation produced with a Display implementation that narrates what
//! changed.

use std::fmt;

use crate::models::{PlannedTask, Profile, ProgressReport};

/// Result of a profile update: the profile as persisted plus a line per
/// field that changed.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub profile: Profile,
    pub changes: Vec<String>,
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            return writeln!(f, "No changes requested; the profile is untouched.");
        }

        writeln!(f, "Profile updated.")?;
        writeln!(f)?;
        writeln!(f, "Changes made:")?;
        for change in &self.changes {
            writeln!(f, "- {change}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.profile)
    }
}

/// Result of marking a task done or reopening it.
///
/// Carries the toggled task and the plan-wide progress figures after the
/// toggle, so shells can confirm the action and show its effect in one
/// message.
#[derive(Debug)]
pub struct ToggleOutcome {
    pub task: PlannedTask,
    pub progress: ProgressReport,
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.task.done {
            writeln!(f, "Marked '{}' as done.", self.task.title)?;
        } else {
            writeln!(f, "Reopened '{}'.", self.task.title)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Progress: {}/{} tasks complete ({}%)",
            self.progress.completed, self.progress.total, self.progress.percent
        )
    }
}

/// Result of clearing the completion record.
#[derive(Debug)]
pub struct ResetOutcome {
    /// How many tasks were marked done before the reset
    pub cleared: usize,
}

impl fmt::Display for ResetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cleared {
            0 => writeln!(f, "Completion state cleared. No tasks were marked done."),
            1 => writeln!(f, "Completion state cleared. 1 completed task was reset."),
            n => writeln!(f, "Completion state cleared. {n} completed tasks were reset."),
        }
    }
}

/// Wrapper type for displaying operation confirmation messages.
///
/// This provides consistent formatting for operations that require
/// user confirmation or status updates.
#[derive(Debug)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
