//! Parameter structures for planner operations.
//!
//! Shared parameter structures usable across interfaces (CLI, MCP) without
//! framework-specific derives. Interface layers wrap these with their own
//! types and convert via `From`/`Into`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Enumerated profile fields travel as strings here and are parsed by
//! [`UpdateProfile::validate`], so every interface funnels through one
//! validation point. JSON schema generation is behind the `schema`
//! feature, enabled by interfaces that need it.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::{EnglishTest, Pace, Profile, State, VisaStream};

/// Parameters for updating the profile.
///
/// Every field is optional; omitted fields keep their current value.
/// Enumerated fields take the stored spellings (for example
/// `"190"`, `"relaxed"`, `"nsw"`, `"pte"`). The start date takes
/// `YYYY-MM-DD`, with the empty string clearing it back to
/// plan-from-today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateProfile {
    /// New visa stream: '189', '190', '491', 'partner', or 'graduate'
    pub visa_stream: Option<String>,
    /// New pace: 'accelerated', 'standard', or 'relaxed'
    pub pace: Option<String>,
    /// New start date as YYYY-MM-DD; empty string clears it
    pub start_date: Option<String>,
    /// New destination: a state/territory code or 'national'
    pub relocating_state: Option<String>,
    /// New English test: 'ielts', 'pte', 'toefl', 'cambridge', or 'none'
    pub english_test: Option<String>,
    /// Whether a partner is included in the application
    pub has_partner: Option<bool>,
    /// Whether an English test still needs to be sat
    pub needs_english_exam: Option<bool>,
    /// Whether children are included in the application
    pub has_children: Option<bool>,
}

impl UpdateProfile {
    /// Validate the raw field values into a typed patch.
    ///
    /// # Errors
    ///
    /// `PlannerError::InvalidInput` naming the offending field and the
    /// accepted spellings when an enumerated value or date fails to
    /// parse. Unset fields are never errors.
    pub fn validate(&self) -> crate::Result<ProfilePatch> {
        let visa_stream = match &self.visa_stream {
            Some(raw) => Some(raw.parse::<VisaStream>().map_err(|_| {
                PlannerError::invalid_input("visa_stream").with_reason(format!(
                    "Invalid visa stream: {raw}. Must be '189', '190', '491', 'partner', or 'graduate'"
                ))
            })?),
            None => None,
        };

        let pace = match &self.pace {
            Some(raw) => Some(raw.parse::<Pace>().map_err(|_| {
                PlannerError::invalid_input("pace").with_reason(format!(
                    "Invalid pace: {raw}. Must be 'accelerated', 'standard', or 'relaxed'"
                ))
            })?),
            None => None,
        };

        let start_date = match self.start_date.as_deref() {
            Some("") => Some(None),
            Some(raw) => Some(Some(raw.parse::<Date>().map_err(|_| {
                PlannerError::invalid_input("start_date")
                    .with_reason(format!("Invalid start date: {raw}. Use YYYY-MM-DD"))
            })?)),
            None => None,
        };

        let relocating_state = match &self.relocating_state {
            Some(raw) => Some(raw.parse::<State>().map_err(|_| {
                PlannerError::invalid_input("relocating_state").with_reason(format!(
                    "Invalid state: {raw}. Must be 'nsw', 'vic', 'qld', 'wa', 'sa', 'tas', \
                     'act', 'nt', or 'national'"
                ))
            })?),
            None => None,
        };

        let english_test = match &self.english_test {
            Some(raw) => Some(raw.parse::<EnglishTest>().map_err(|_| {
                PlannerError::invalid_input("english_test").with_reason(format!(
                    "Invalid english test: {raw}. Must be 'ielts', 'pte', 'toefl', \
                     'cambridge', or 'none'"
                ))
            })?),
            None => None,
        };

        Ok(ProfilePatch {
            visa_stream,
            pace,
            start_date,
            relocating_state,
            english_test,
            has_partner: self.has_partner,
            needs_english_exam: self.needs_english_exam,
            has_children: self.has_children,
        })
    }
}

/// The typed, validated form of [`UpdateProfile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub visa_stream: Option<VisaStream>,
    pub pace: Option<Pace>,
    /// `Some(None)` clears the start date back to plan-from-today
    pub start_date: Option<Option<Date>>,
    pub relocating_state: Option<State>,
    pub english_test: Option<EnglishTest>,
    pub has_partner: Option<bool>,
    pub needs_english_exam: Option<bool>,
    pub has_children: Option<bool>,
}

impl ProfilePatch {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.visa_stream.is_none()
            && self.pace.is_none()
            && self.start_date.is_none()
            && self.relocating_state.is_none()
            && self.english_test.is_none()
            && self.has_partner.is_none()
            && self.needs_english_exam.is_none()
            && self.has_children.is_none()
    }

    /// Apply the patch to a profile, returning a human-readable line per
    /// field that was set.
    pub fn apply(&self, profile: &mut Profile) -> Vec<String> {
        let mut changes = Vec::new();

        if let Some(stream) = self.visa_stream {
            profile.visa_stream = stream;
            changes.push(format!("visa stream set to {}", stream.label()));
        }
        if let Some(pace) = self.pace {
            profile.pace = pace;
            changes.push(format!("pace set to {}", pace.as_str()));
        }
        if let Some(date) = self.start_date {
            profile.start_date = date;
            match date {
                Some(day) => changes.push(format!("start date set to {day}")),
                None => changes.push("start date cleared; planning from today".to_string()),
            }
        }
        if let Some(state) = self.relocating_state {
            profile.relocating_state = state;
            changes.push(format!("destination set to {}", state.label()));
        }
        if let Some(test) = self.english_test {
            profile.english_test = test;
            changes.push(format!("english test set to {}", test.label()));
        }
        if let Some(flag) = self.has_partner {
            profile.has_partner = flag;
            changes.push(format!("partner included: {flag}"));
        }
        if let Some(flag) = self.needs_english_exam {
            profile.needs_english_exam = flag;
            changes.push(format!("english exam needed: {flag}"));
        }
        if let Some(flag) = self.has_children {
            profile.has_children = flag;
            changes.push(format!("children included: {flag}"));
        }

        changes
    }
}

/// Parameters for operations addressing a single task by id.
///
/// Used for marking tasks done and reopening them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskRef {
    /// Catalogue id of the task (for example 'settle-tfn')
    pub id: String,
}

/// Parameters for listing planned tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTasks {
    /// Restrict the list to one stage by its id
    pub stage: Option<String>,
}

/// Parameters for clearing all completion state.
///
/// Destructive, so it must be explicitly confirmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResetCompletion {
    /// Must be true for the reset to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for restoring the profile to its defaults.
///
/// Destructive, so it must be explicitly confirmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResetProfile {
    /// Must be true for the reset to proceed
    #[serde(default)]
    pub confirmed: bool,
}
