//! Plan derivation operations and their projections.

use super::Planner;
use crate::{
    display::{NextSteps, ResourceList, TaskList},
    error::{PlannerError, Result},
    models::{PlanView, ProgressReport},
    params::ListTasks,
};

impl Planner {
    /// Derives the complete plan view from the stored profile and
    /// completion map.
    ///
    /// Nothing is cached: every call re-reads the store and re-derives,
    /// so the view always reflects the latest state.
    pub async fn plan(&self) -> Result<PlanView> {
        self.with_store(|store| Self::derive_from(store)).await
    }

    /// Lists planned tasks, optionally restricted to one stage.
    ///
    /// # Errors
    ///
    /// `PlannerError::StageNotFound` when a stage filter names a stage
    /// that is not part of the current plan (either unknown or excluded
    /// by the profile).
    pub async fn tasks(&self, params: &ListTasks) -> Result<TaskList> {
        let view = self.plan().await?;

        match &params.stage {
            Some(stage_id) => {
                if view.stage(stage_id).is_none() {
                    return Err(PlannerError::StageNotFound {
                        id: stage_id.clone(),
                    });
                }
                let tasks = view
                    .tasks
                    .iter()
                    .filter(|t| t.stage_id == stage_id)
                    .cloned()
                    .collect();
                Ok(TaskList(tasks))
            }
            None => Ok(TaskList(view.tasks)),
        }
    }

    /// The leading incomplete tasks in plan order, bounded to four.
    pub async fn next_steps(&self) -> Result<NextSteps> {
        let view = self.plan().await?;
        Ok(NextSteps(view.progress.next_steps))
    }

    /// Aggregate and per-stage completion figures for the current plan.
    pub async fn progress(&self) -> Result<ProgressReport> {
        let view = self.plan().await?;
        Ok(view.progress)
    }

    /// Stage resources for the current plan, deduplicated by URL.
    pub async fn resources(&self) -> Result<ResourceList> {
        let view = self.plan().await?;
        Ok(ResourceList(view.resources))
    }
}
