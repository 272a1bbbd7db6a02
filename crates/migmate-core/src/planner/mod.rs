//! High-level planner API over the persisted state and the derivation.
//!
//! This module provides the main [`Planner`] interface for interacting with
//! the Migmate planning system. The planner loads the profile and the
//! completion map from the state store, runs the pure derivation in
//! [`crate::plan`], and hands back display-ready results.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Planner      │    │   Derivation    │    │   State Store   │
//! │ (profile_ops,   │───▶│ (plan::derive_  │    │  (via store/)   │
//! │  plan_ops,      │    │  plan)          │◀───│                 │
//! │  task_ops)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   User Interface        Pure Business Logic    Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`profile_ops`]: Profile read, update and reset operations
//! - [`plan_ops`]: Plan derivation and its projections (tasks, next steps,
//!   progress, resources)
//! - [`task_ops`]: Completion toggles and the completion reset
//!
//! ## Design Principles
//!
//! 1. **Async Boundary**: every operation opens the store inside
//!    `spawn_blocking`, keeping SQLite off the async executor
//! 2. **Total Recomputation**: no derived state is cached; every read
//!    re-derives the plan from the stored inputs
//! 3. **Write-Through**: mutations serialize and persist the whole record
//!    before returning
//! 4. **Display Integration**: results are formatted via the display system

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod plan_ops;
pub mod profile_ops;
pub mod task_ops;


// Re-export the main types
pub use builder::PlannerBuilder;

use crate::error::{PlannerError, Result};
use crate::models::PlanView;
use crate::store::{state, SqliteStore};

/// Main planner interface over the profile, completion state and plan.
pub struct Planner {
    pub(crate) store_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified store path.
    pub(crate) fn new(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    /// Runs a closure against a freshly opened store on the blocking pool.
    ///
    /// Connections are cheap to open, so each operation gets its own and
    /// nothing is held across await points.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteStore) -> Result<T> + Send + 'static,
    {
        let store_path = self.store_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut store = SqliteStore::open(&store_path)?;
            f(&mut store)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Loads both persisted records and derives the current plan view.
    pub(crate) fn derive_from(store: &SqliteStore) -> Result<PlanView> {
        let profile = state::load_profile(store)?;
        let completion = state::load_completion(store)?;
        Ok(crate::plan::derive_plan(
            &profile,
            &completion,
            &crate::catalogue::stages(),
        ))
    }
}
