//! Due-date distribution across stage windows.

use jiff::Span;

use crate::models::{PlannedStage, PlannedTask};

/// Flatten planned stages into scheduled tasks with suggested due dates.
///
/// Order is stage order, then catalogue task order within a stage. For a
/// stage window of `W = duration_weeks * 7` days holding `N` tasks, the
/// task at 1-indexed position `i` is offset `W` days when `N == 1` and
/// `round((i / N) * W)` days otherwise; the due date lands at
/// `start + max(offset - 1, 0)` days. That spreads tasks evenly through
/// the window with the last task due the day before the window closes.
///
/// The spread is purely positional: no effort weighting, no dependencies,
/// no calendar awareness. Stages with no surviving tasks contribute
/// nothing.
pub fn schedule_tasks(stages: &[PlannedStage]) -> Vec<PlannedTask> {
    let mut scheduled = Vec::new();

    for (stage_index, stage) in stages.iter().enumerate() {
        let window_days = i64::from(stage.duration_weeks) * 7;
        let count = stage.tasks.len();

        for (position, task) in stage.tasks.iter().enumerate() {
            let offset = due_offset(position + 1, count, window_days);
            let due_on = stage.starts_on.saturating_add(Span::new().days(offset));

            scheduled.push(PlannedTask {
                id: task.id,
                title: task.title,
                detail: task.detail,
                link: task.link,
                stage_id: stage.id,
                stage_title: stage.title,
                stage_index,
                window_starts: stage.starts_on,
                window_ends: stage.ends_on,
                due_on,
                done: false,
            });
        }
    }

    scheduled
}

/// Days from the window start to the suggested due date.
fn due_offset(position: usize, count: usize, window_days: i64) -> i64 {
    let raw = if count == 1 {
        window_days
    } else {
        ((position as f64 / count as f64) * window_days as f64).round() as i64
    };
    (raw - 1).max(0)
}
