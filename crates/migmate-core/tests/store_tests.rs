//! State store tests: lenient recovery and durability across reopens.

mod common;

use common::create_test_environment;
use migmate_core::store::state::{
    load_completion, load_profile, save_completion, save_profile, COMPLETION_KEY, PROFILE_KEY,
};
use migmate_core::{CompletionMap, KeyValueStore, Pace, Profile, SqliteStore};

#[test]
fn test_corrupt_profile_record_degrades_to_defaults() {
    let (_temp_dir, store_path) = create_test_environment();
    let mut store = SqliteStore::open(&store_path).expect("Failed to open store");

    store
        .set(PROFILE_KEY, "{{{ not json")
        .expect("Failed to plant corrupt record");

    let profile = load_profile(&store).expect("Load must not fail on corrupt data");
    assert_eq!(profile, Profile::default());
}

#[test]
fn test_corrupt_completion_record_degrades_to_empty() {
    let (_temp_dir, store_path) = create_test_environment();
    let mut store = SqliteStore::open(&store_path).expect("Failed to open store");

    store
        .set(COMPLETION_KEY, "[1,2,3]")
        .expect("Failed to plant corrupt record");

    let completion = load_completion(&store).expect("Load must not fail on corrupt data");
    assert!(completion.is_empty());
}

#[test]
fn test_partially_bad_profile_record_keeps_good_fields() {
    let (_temp_dir, store_path) = create_test_environment();
    let mut store = SqliteStore::open(&store_path).expect("Failed to open store");

    store
        .set(
            PROFILE_KEY,
            r#"{"pace": "relaxed", "visa_stream": 42, "legacy_field": true}"#,
        )
        .expect("Failed to write record");

    let profile = load_profile(&store).expect("Load must not fail");
    assert_eq!(profile.pace, Pace::Relaxed);
    // Ill-typed field fell back to its default, unknown field was ignored
    assert_eq!(profile.visa_stream, Profile::default().visa_stream);
}

#[test]
fn test_records_survive_reopen() {
    let (_temp_dir, store_path) = create_test_environment();

    {
        let mut store = SqliteStore::open(&store_path).expect("Failed to open store");
        let profile = Profile {
            pace: Pace::Accelerated,
            ..Profile::default()
        };
        save_profile(&mut store, &profile).expect("Failed to save profile");

        let mut completion = CompletionMap::new();
        completion.set("settle-tfn", true);
        save_completion(&mut store, &completion).expect("Failed to save completion");
    }

    let store = SqliteStore::open(&store_path).expect("Failed to reopen store");
    let profile = load_profile(&store).expect("Failed to load profile");
    assert_eq!(profile.pace, Pace::Accelerated);

    let completion = load_completion(&store).expect("Failed to load completion");
    assert!(completion.is_done("settle-tfn"));
}

#[test]
fn test_records_are_independently_keyed() {
    let (_temp_dir, store_path) = create_test_environment();
    let mut store = SqliteStore::open(&store_path).expect("Failed to open store");

    // Corrupting one record must not affect the other
    let mut completion = CompletionMap::new();
    completion.set("eoi-submit", true);
    save_completion(&mut store, &completion).expect("Failed to save completion");
    store
        .set(PROFILE_KEY, "garbage")
        .expect("Failed to plant corrupt record");

    assert_eq!(load_profile(&store).unwrap(), Profile::default());
    assert!(load_completion(&store).unwrap().is_done("eoi-submit"));
}
