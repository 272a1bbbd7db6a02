//! Tests for the data models.

use jiff::civil::date;

use super::*;

#[test]
fn test_visa_stream_round_trip() {
    for raw in ["189", "190", "491", "partner", "graduate"] {
        let stream: VisaStream = raw.parse().expect("known stream must parse");
        assert_eq!(stream.as_str(), raw);
    }
    assert!("600".parse::<VisaStream>().is_err());
}

#[test]
fn test_pace_round_trip_and_multipliers() {
    assert_eq!("accelerated".parse::<Pace>(), Ok(Pace::Accelerated));
    assert_eq!("Standard".parse::<Pace>(), Ok(Pace::Standard));
    assert_eq!("RELAXED".parse::<Pace>(), Ok(Pace::Relaxed));
    assert!("turbo".parse::<Pace>().is_err());

    assert_eq!(Pace::Accelerated.multiplier(), 0.75);
    assert_eq!(Pace::Standard.multiplier(), 1.0);
    assert_eq!(Pace::Relaxed.multiplier(), 1.25);
}

#[test]
fn test_state_round_trip() {
    for raw in ["nsw", "vic", "qld", "wa", "sa", "tas", "act", "nt", "national"] {
        let state: State = raw.parse().expect("known state must parse");
        assert_eq!(state.as_str(), raw);
    }
    assert!("zz".parse::<State>().is_err());
}

#[test]
fn test_english_test_round_trip() {
    for raw in ["ielts", "pte", "toefl", "cambridge", "none"] {
        let test: EnglishTest = raw.parse().expect("known test must parse");
        assert_eq!(test.as_str(), raw);
    }
    assert!("duolingo".parse::<EnglishTest>().is_err());
}

#[test]
fn test_profile_defaults() {
    let profile = Profile::default();
    assert_eq!(profile.visa_stream, VisaStream::Independent);
    assert_eq!(profile.pace, Pace::Standard);
    assert_eq!(profile.relocating_state, State::National);
    assert_eq!(profile.english_test, EnglishTest::None);
    assert!(profile.needs_english_exam);
    assert!(!profile.has_partner);
    assert!(!profile.has_children);
    assert_eq!(profile.start_date, None);
}

#[test]
fn test_profile_serde_uses_stored_spellings() {
    let profile = Profile {
        visa_stream: VisaStream::StateNominated,
        pace: Pace::Relaxed,
        relocating_state: State::Vic,
        english_test: EnglishTest::Ielts,
        start_date: Some(date(2024, 1, 1)),
        ..Profile::default()
    };

    let json = serde_json::to_string(&profile).expect("profile must serialize");
    assert!(json.contains(r#""visa_stream":"190""#));
    assert!(json.contains(r#""pace":"relaxed""#));
    assert!(json.contains(r#""relocating_state":"vic""#));
    assert!(json.contains(r#""english_test":"ielts""#));
    assert!(json.contains(r#""start_date":"2024-01-01""#));

    let back: Profile = serde_json::from_str(&json).expect("profile must deserialize");
    assert_eq!(back, profile);
}

#[test]
fn test_profile_deserialize_fills_missing_fields() {
    // serde(default) covers fields absent from a well-formed object
    let profile: Profile = serde_json::from_str(r#"{"pace":"accelerated"}"#).unwrap();
    assert_eq!(profile.pace, Pace::Accelerated);
    assert_eq!(profile.visa_stream, VisaStream::Independent);
}

#[test]
fn test_completion_map_absent_means_incomplete() {
    let mut completion = CompletionMap::new();
    assert!(!completion.is_done("anything"));

    completion.set("eoi-submit", true);
    assert!(completion.is_done("eoi-submit"));

    completion.set("eoi-submit", false);
    assert!(!completion.is_done("eoi-submit"));
    // An explicit false is still a recorded entry
    assert_eq!(completion.len(), 1);
}

#[test]
fn test_completion_map_serializes_transparently() {
    let mut completion = CompletionMap::new();
    completion.set("settle-tfn", true);
    completion.set("eoi-submit", false);

    let json = serde_json::to_string(&completion).unwrap();
    assert_eq!(json, r#"{"eoi-submit":false,"settle-tfn":true}"#);
}

#[test]
fn test_plan_view_lookups() {
    let profile = Profile {
        start_date: Some(date(2024, 1, 1)),
        ..Profile::default()
    };
    let view = crate::derive_plan(&profile, &CompletionMap::new(), &crate::catalogue::stages());

    assert!(view.stage("foundations").is_some());
    assert!(view.stage("state-nomination").is_none());
    assert!(view.task("foundation-passport-check").is_some());
    assert!(view.task("nomination-track").is_none());
}
