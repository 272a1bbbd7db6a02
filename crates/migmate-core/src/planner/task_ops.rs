//! Completion operations for the Planner.

use super::Planner;
use crate::{
    display::{ResetOutcome, ToggleOutcome},
    error::{PlannerError, Result},
    params::{ResetCompletion, TaskRef},
    plan,
    store::state,
};

impl Planner {
    /// Records a task's done flag and persists the whole completion map.
    ///
    /// The task must exist in the *current* plan; ids that the profile has
    /// filtered out are rejected rather than silently recorded, so a typo
    /// cannot plant a stale entry. The returned outcome carries the task
    /// and the progress figures after the toggle.
    ///
    /// # Errors
    ///
    /// `PlannerError::TaskNotFound` when the id is not in the current plan.
    pub async fn set_task_done(&self, params: &TaskRef, done: bool) -> Result<ToggleOutcome> {
        let task_id = params.id.clone();

        self.with_store(move |store| {
            let profile = state::load_profile(store)?;
            let mut completion = state::load_completion(store)?;
            let catalogue = crate::catalogue::stages();

            let view = plan::derive_plan(&profile, &completion, &catalogue);
            let Some(task) = view.task(&task_id) else {
                return Err(PlannerError::TaskNotFound { id: task_id });
            };
            let mut task = task.clone();

            completion.set(task.id, done);
            state::save_completion(store, &completion)?;
            task.done = done;

            let after = plan::derive_plan(&profile, &completion, &catalogue);
            Ok(ToggleOutcome {
                task,
                progress: after.progress,
            })
        })
        .await
    }

    /// Marks a task done.
    pub async fn complete_task(&self, params: &TaskRef) -> Result<ToggleOutcome> {
        self.set_task_done(params, true).await
    }

    /// Reopens a previously completed task.
    pub async fn reopen_task(&self, params: &TaskRef) -> Result<ToggleOutcome> {
        self.set_task_done(params, false).await
    }

    /// Drops the entire completion record.
    ///
    /// Requires explicit confirmation to prevent accidental loss of
    /// everything the user has ticked off.
    pub async fn reset_completion(&self, params: &ResetCompletion) -> Result<ResetOutcome> {
        if !params.confirmed {
            return Err(PlannerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Completion reset clears every task you have marked done. Set \
                         'confirmed' to true to proceed."
                    .to_string(),
            });
        }

        self.with_store(|store| {
            let completion = state::load_completion(store)?;
            let cleared = completion.iter().filter(|(_, done)| *done).count();
            state::clear_completion(store)?;
            Ok(ResetOutcome { cleared })
        })
        .await
    }
}
