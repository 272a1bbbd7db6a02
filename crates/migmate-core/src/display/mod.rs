//! Display formatting functions and result types.
//!
//! This module provides wrapper types for collections and operation
//! results, enabling consistent markdown formatting across different
//! output contexts (CLI terminal, MCP tool responses).
//!
//! # Architecture: Display Functions and Wrappers
//!
//! Direct [`std::fmt::Display`] implementations on the domain models
//! (in [`models`]) handle individual items; newtype wrappers handle
//! collections and operation outcomes:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types & │    │   Formatted     │
//! │ (PlanView, ...) │───▶│ Outcome Types   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (TaskList, NextSteps,
//!   ResourceList)
//! - [`results`]: Operation outcome types (UpdateOutcome, ToggleOutcome,
//!   ResetOutcome) and status messages (OperationStatus)
//! - [`datetime`]: Calendar date formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! All formatters produce markdown so the same string renders richly in
//! the terminal and reads cleanly as plain text.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::{NextSteps, ResourceList, TaskList};
pub use datetime::CalendarDay;
pub use results::{OperationStatus, ResetOutcome, ToggleOutcome, UpdateOutcome};
