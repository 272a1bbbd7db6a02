//! Completion state and progress aggregates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::plan::PlannedTask;

/// Map from task id to done flag.
///
/// Persisted whole on every toggle. Absent ids are treated as incomplete,
/// and ids left behind by removed catalogue tasks are harmless, so the map
/// is never pruned. The ordered backing map keeps the serialized form
/// stable across writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMap(BTreeMap<String, bool>);

impl CompletionMap {
    /// Create an empty map (all tasks incomplete).
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the id is present and marked done.
    pub fn is_done(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Record a task's done flag.
    pub fn set(&mut self, id: impl Into<String>, done: bool) {
        self.0.insert(id.into(), done);
    }

    /// Number of recorded entries, including stale and false ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop every recorded entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate over recorded entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(id, done)| (id.as_str(), *done))
    }
}

impl FromIterator<(String, bool)> for CompletionMap {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Aggregate progress over the whole plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// Count of planned tasks
    pub total: usize,

    /// Count of planned tasks marked done
    pub completed: usize,

    /// Rounded whole percentage, 0 when there are no tasks
    pub percent: u32,

    /// Leading incomplete tasks in plan order, bounded to four
    pub next_steps: Vec<PlannedTask>,

    /// Per-stage rollups in plan order
    pub stages: Vec<StageProgress>,
}

/// Completion rollup restricted to one stage's tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageProgress {
    /// Catalogue stage identifier
    pub stage_id: &'static str,

    /// Display title of the stage
    pub title: &'static str,

    /// Count of the stage's planned tasks
    pub total: usize,

    /// Count of the stage's planned tasks marked done
    pub completed: usize,

    /// Rounded whole percentage, 0 when the stage has no tasks
    pub percent: u32,
}
