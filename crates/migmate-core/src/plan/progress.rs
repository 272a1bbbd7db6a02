//! Progress aggregation over the flattened task list.

use crate::models::{CompletionMap, PlannedTask, ProgressReport, StageProgress};

/// How many incomplete tasks the next-steps list surfaces.
pub const NEXT_STEPS_LIMIT: usize = 4;

/// Fold the completion map into plan-wide and per-stage progress.
///
/// Absent ids count as incomplete. The next-steps list is the leading
/// [`NEXT_STEPS_LIMIT`] incomplete tasks in flattened order, recomputed
/// from the current ordering on every call, so completing an early task
/// immediately promotes the next incomplete one into view. An empty list
/// means everything is done.
pub fn aggregate(tasks: &[PlannedTask], completion: &CompletionMap) -> ProgressReport {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| completion.is_done(t.id)).count();

    let next_steps = tasks
        .iter()
        .filter(|t| !completion.is_done(t.id))
        .take(NEXT_STEPS_LIMIT)
        .cloned()
        .collect();

    ProgressReport {
        total,
        completed,
        percent: percent(completed, total),
        next_steps,
        stages: stage_rollups(tasks, completion),
    }
}

/// Per-stage completed/total/percent, in plan order.
///
/// Only stages that contributed tasks appear here; the derivation root
/// backfills zero-count entries for stages whose task list filtered to
/// nothing.
fn stage_rollups(tasks: &[PlannedTask], completion: &CompletionMap) -> Vec<StageProgress> {
    let mut rollups: Vec<StageProgress> = Vec::new();

    for task in tasks {
        let done = completion.is_done(task.id);
        match rollups.last_mut() {
            Some(rollup) if rollup.stage_id == task.stage_id => {
                rollup.total += 1;
                if done {
                    rollup.completed += 1;
                }
            }
            _ => rollups.push(StageProgress {
                stage_id: task.stage_id,
                title: task.stage_title,
                total: 1,
                completed: usize::from(done),
                percent: 0,
            }),
        }
    }

    for rollup in &mut rollups {
        rollup.percent = percent(rollup.completed, rollup.total);
    }
    rollups
}

/// Rounded whole percentage, 0 when there is nothing to count.
fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}
