//! Data models for profiles, the stage catalogue, and derived plans.
//!
//! Three families of types live here:
//!
//! 1. **Persisted state** ([`Profile`], [`CompletionMap`]): the only mutable
//!    records. Both are serialized whole on every change and reloaded
//!    leniently (see [`crate::store::state`]).
//! 2. **Catalogue blueprints** ([`StageBlueprint`], [`TaskBlueprint`],
//!    [`Resource`]): immutable, process-wide constants describing the
//!    migration journey. Applicability is expressed as [`Predicate`]
//!    function pointers carried in the data.
//! 3. **Derived views** ([`PlannedStage`], [`PlannedTask`], [`PlanView`],
//!    [`ProgressReport`]): ephemeral projections rebuilt from scratch by
//!    [`crate::plan::derive_plan`] whenever an input changes. They have no
//!    lifecycle of their own and are never persisted.
//!
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.

pub mod catalogue;
pub mod plan;
pub mod profile;
pub mod progress;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use catalogue::{Predicate, Resource, StageBlueprint, TaskBlueprint, TaskLink};
pub use plan::{PlanView, PlannedStage, PlannedTask};
pub use profile::{EnglishTest, Pace, Profile, State, VisaStream};
pub use progress::{CompletionMap, ProgressReport, StageProgress};
