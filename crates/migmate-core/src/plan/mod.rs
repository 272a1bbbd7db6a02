//! The planning derivation.
//!
//! A pure, deterministic pipeline from (profile, catalogue, completion
//! state) to a complete [`PlanView`]:
//!
//! 1. [`plan_stages`] filters the catalogue by the profile and lays out
//!    contiguous stage windows from the start date and pace.
//! 2. [`schedule_tasks`] flattens surviving tasks and spreads suggested
//!    due dates evenly across each stage window.
//! 3. [`aggregate`] folds the completion map into totals, percentages and
//!    the bounded next-steps list.
//! 4. [`collect_resources`] gathers stage resources, deduplicated by URL.
//!
//! Recomputation is total: every input change re-derives the whole view
//! from scratch. Nothing here performs I/O or touches shared state, so the
//! pipeline is trivially testable with an in-memory completion map.

mod progress;
mod resources;
mod schedule;
mod stages;

#[cfg(test)]
mod tests;

pub use progress::{aggregate, NEXT_STEPS_LIMIT};
pub use resources::collect_resources;
pub use schedule::schedule_tasks;
pub use stages::plan_stages;

use crate::models::{
    CompletionMap, PlanView, Profile, StageBlueprint, StageProgress,
};

/// Derive the complete plan view for a profile and completion state.
///
/// This is the composition root the shells call. The catalogue is passed
/// in rather than read here so tests can substitute a synthetic one.
pub fn derive_plan(
    profile: &Profile,
    completion: &CompletionMap,
    catalogue: &[StageBlueprint],
) -> PlanView {
    let stages = plan_stages(profile, catalogue);
    let mut tasks = schedule_tasks(&stages);
    for task in &mut tasks {
        task.done = completion.is_done(task.id);
    }

    let mut progress = aggregate(&tasks, completion);
    fill_empty_stages(&stages, &mut progress.stages);

    let resources = collect_resources(&stages);
    let total_weeks = stages.iter().map(|s| s.duration_weeks).sum();

    PlanView {
        stages,
        tasks,
        progress,
        resources,
        total_weeks,
        completion: completion.clone(),
    }
}

/// A planned stage with no surviving tasks is valid; give it a zero-count
/// rollup so the per-stage progress list always covers the whole plan.
fn fill_empty_stages(
    stages: &[crate::models::PlannedStage],
    rollups: &mut Vec<StageProgress>,
) {
    if rollups.len() == stages.len() {
        return;
    }
    let mut filled = Vec::with_capacity(stages.len());
    for stage in stages {
        match rollups.iter().find(|r| r.stage_id == stage.id) {
            Some(rollup) => filled.push(rollup.clone()),
            None => filled.push(StageProgress {
                stage_id: stage.id,
                title: stage.title,
                total: 0,
                completed: 0,
                percent: 0,
            }),
        }
    }
    *rollups = filled;
}
