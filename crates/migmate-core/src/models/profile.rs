//! User profile model and its enumerated fields.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of supported visa streams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum VisaStream {
    /// Skilled Independent (subclass 189)
    #[default]
    #[serde(rename = "189")]
    Independent,

    /// Skilled Nominated (subclass 190)
    #[serde(rename = "190")]
    StateNominated,

    /// Skilled Work Regional (subclass 491)
    #[serde(rename = "491")]
    Regional,

    /// Partner visa (subclasses 309/100 or 820/801)
    #[serde(rename = "partner")]
    Partner,

    /// Temporary Graduate visa (subclass 485)
    #[serde(rename = "graduate")]
    Graduate,
}

impl FromStr for VisaStream {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "189" => Ok(VisaStream::Independent),
            "190" => Ok(VisaStream::StateNominated),
            "491" => Ok(VisaStream::Regional),
            "partner" => Ok(VisaStream::Partner),
            "graduate" => Ok(VisaStream::Graduate),
            _ => Err(format!("Invalid visa stream: {s}")),
        }
    }
}

impl VisaStream {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisaStream::Independent => "189",
            VisaStream::StateNominated => "190",
            VisaStream::Regional => "491",
            VisaStream::Partner => "partner",
            VisaStream::Graduate => "graduate",
        }
    }

    /// Human-readable name for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            VisaStream::Independent => "Skilled Independent (189)",
            VisaStream::StateNominated => "Skilled Nominated (190)",
            VisaStream::Regional => "Skilled Work Regional (491)",
            VisaStream::Partner => "Partner",
            VisaStream::Graduate => "Temporary Graduate (485)",
        }
    }
}

/// How aggressively the timeline is compressed or stretched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// Shorter windows for users pushing hard
    Accelerated,

    /// The nominal catalogue durations
    #[default]
    Standard,

    /// Longer windows for users with less time to spare
    Relaxed,
}

impl FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accelerated" => Ok(Pace::Accelerated),
            "standard" => Ok(Pace::Standard),
            "relaxed" => Ok(Pace::Relaxed),
            _ => Err(format!("Invalid pace: {s}")),
        }
    }
}

impl Pace {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Accelerated => "accelerated",
            Pace::Standard => "standard",
            Pace::Relaxed => "relaxed",
        }
    }

    /// Scalar applied to every stage's nominal duration.
    pub fn multiplier(&self) -> f64 {
        match self {
            Pace::Accelerated => 0.75,
            Pace::Standard => 1.0,
            Pace::Relaxed => 1.25,
        }
    }
}

/// Destination state or territory, with a national fallback for users who
/// have not committed to one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Act,
    Nt,

    /// No specific destination chosen yet
    #[default]
    National,
}

impl FromStr for State {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nsw" => Ok(State::Nsw),
            "vic" => Ok(State::Vic),
            "qld" => Ok(State::Qld),
            "wa" => Ok(State::Wa),
            "sa" => Ok(State::Sa),
            "tas" => Ok(State::Tas),
            "act" => Ok(State::Act),
            "nt" => Ok(State::Nt),
            "national" => Ok(State::National),
            _ => Err(format!("Invalid state: {s}")),
        }
    }
}

impl State {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Nsw => "nsw",
            State::Vic => "vic",
            State::Qld => "qld",
            State::Wa => "wa",
            State::Sa => "sa",
            State::Tas => "tas",
            State::Act => "act",
            State::Nt => "nt",
            State::National => "national",
        }
    }

    /// Human-readable name for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            State::Nsw => "New South Wales",
            State::Vic => "Victoria",
            State::Qld => "Queensland",
            State::Wa => "Western Australia",
            State::Sa => "South Australia",
            State::Tas => "Tasmania",
            State::Act => "Australian Capital Territory",
            State::Nt => "Northern Territory",
            State::National => "Anywhere in Australia",
        }
    }
}

/// English test the user intends to sit, if any.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnglishTest {
    Ielts,
    Pte,
    Toefl,
    Cambridge,

    /// No test chosen yet
    #[default]
    None,
}

impl FromStr for EnglishTest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ielts" => Ok(EnglishTest::Ielts),
            "pte" => Ok(EnglishTest::Pte),
            "toefl" => Ok(EnglishTest::Toefl),
            "cambridge" => Ok(EnglishTest::Cambridge),
            "none" => Ok(EnglishTest::None),
            _ => Err(format!("Invalid english test: {s}")),
        }
    }
}

impl EnglishTest {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnglishTest::Ielts => "ielts",
            EnglishTest::Pte => "pte",
            EnglishTest::Toefl => "toefl",
            EnglishTest::Cambridge => "cambridge",
            EnglishTest::None => "none",
        }
    }

    /// Human-readable name for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            EnglishTest::Ielts => "IELTS",
            EnglishTest::Pte => "PTE Academic",
            EnglishTest::Toefl => "TOEFL iBT",
            EnglishTest::Cambridge => "Cambridge C1 Advanced",
            EnglishTest::None => "Not chosen",
        }
    }
}

/// User-editable planning configuration.
///
/// A profile is always fully populated in memory. Loading merges the
/// persisted record over [`Profile::default`] field by field, so a missing
/// or malformed field never leaves a hole (see
/// [`crate::store::state::decode_profile`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    /// Visa stream being pursued
    pub visa_stream: VisaStream,

    /// Whether a partner is included in the application
    pub has_partner: bool,

    /// Whether an English test still needs to be sat
    pub needs_english_exam: bool,

    /// Whether children are included in the application
    pub has_children: bool,

    /// Timeline pace applied to every stage duration
    pub pace: Pace,

    /// First day of the plan; the derivation date is used when unset
    pub start_date: Option<Date>,

    /// Destination state or territory
    pub relocating_state: State,

    /// English test the user intends to sit
    pub english_test: EnglishTest,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            visa_stream: VisaStream::default(),
            has_partner: false,
            needs_english_exam: true,
            has_children: false,
            pace: Pace::default(),
            start_date: None,
            relocating_state: State::default(),
            english_test: EnglishTest::default(),
        }
    }
}
