//! Core library for the Migmate migration planning application.
//!
//! This crate derives a personalised checklist and timeline from a small
//! user profile and a fixed stage catalogue. The derivation is a pure
//! function: [`plan::derive_plan`] maps (profile, completion state,
//! catalogue) to a complete [`models::PlanView`], with no I/O and no
//! hidden state. Persistence is confined to [`store`], which keeps the
//! profile and completion map as whole serialized records in a key-value
//! store.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently depending
//! on context (timeline vs. checklist, profile updates vs. task toggles)
//! while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use migmate_core::{PlannerBuilder, params::UpdateProfile};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance
//! let planner = PlannerBuilder::new()
//!     .with_store_path(Some("state.db"))
//!     .build()
//!     .await?;
//!
//! // Adjust the profile; the plan re-derives from it on every read
//! let params = UpdateProfile {
//!     visa_stream: Some("190".to_string()),
//!     start_date: Some("2026-03-02".to_string()),
//!     ..UpdateProfile::default()
//! };
//! let outcome = planner.update_profile(&params).await?;
//! println!("{}", outcome);
//!
//! // Derive and render the full plan
//! let view = planner.plan().await?;
//! println!("{}", view);
//! # Ok(())
//! # }
//! ```

pub mod catalogue;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod plan;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use display::{
    NextSteps, OperationStatus, ResetOutcome, ResourceList, TaskList, ToggleOutcome,
    UpdateOutcome,
};
pub use error::{PlannerError, Result};
pub use models::{
    CompletionMap, EnglishTest, Pace, PlanView, PlannedStage, PlannedTask, Profile,
    ProgressReport, Resource, StageBlueprint, State, TaskBlueprint, VisaStream,
};
pub use params::{ListTasks, ResetCompletion, ResetProfile, TaskRef, UpdateProfile};
pub use plan::derive_plan;
pub use planner::{Planner, PlannerBuilder};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
