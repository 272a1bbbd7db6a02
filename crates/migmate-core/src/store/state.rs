//! Versioned state records and their lenient codec.
//!
//! Two records exist, each stored whole under a fixed, versioned key so a
//! future format change can move to a new key without breaking old data.
//! Loads never fail on content: malformed payloads degrade to defaults,
//! because losing a corrupt record is better than wedging the tool.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::KeyValueStore;
use crate::error::Result;
use crate::models::{CompletionMap, Profile};

/// Storage key for the profile record.
pub const PROFILE_KEY: &str = "profile.v1";

/// Storage key for the completion record.
pub const COMPLETION_KEY: &str = "completion.v1";

/// Load the profile, merging the stored record over defaults.
pub fn load_profile(store: &impl KeyValueStore) -> Result<Profile> {
    Ok(match store.get(PROFILE_KEY)? {
        Some(payload) => decode_profile(&payload),
        None => Profile::default(),
    })
}

/// Serialize and write the whole profile.
pub fn save_profile(store: &mut impl KeyValueStore, profile: &Profile) -> Result<()> {
    let payload = serde_json::to_string(profile)?;
    store.set(PROFILE_KEY, &payload)
}

/// Load the completion map, defaulting to empty.
pub fn load_completion(store: &impl KeyValueStore) -> Result<CompletionMap> {
    Ok(match store.get(COMPLETION_KEY)? {
        Some(payload) => decode_completion(&payload),
        None => CompletionMap::new(),
    })
}

/// Serialize and write the whole completion map.
pub fn save_completion(store: &mut impl KeyValueStore, completion: &CompletionMap) -> Result<()> {
    let payload = serde_json::to_string(completion)?;
    store.set(COMPLETION_KEY, &payload)
}

/// Drop the completion record entirely.
pub fn clear_completion(store: &mut impl KeyValueStore) -> Result<()> {
    store.remove(COMPLETION_KEY)
}

/// Decode a stored profile leniently.
///
/// Recovery is field by field: unknown fields are ignored, and a missing
/// or ill-typed field falls back to that field's default rather than
/// failing the record. Only a payload that is not a JSON object at all
/// falls back to the entire default profile.
pub fn decode_profile(payload: &str) -> Profile {
    let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(payload) else {
        return Profile::default();
    };

    let mut profile = Profile::default();
    merge(&mut profile.visa_stream, &mut fields, "visa_stream");
    merge(&mut profile.has_partner, &mut fields, "has_partner");
    merge(
        &mut profile.needs_english_exam,
        &mut fields,
        "needs_english_exam",
    );
    merge(&mut profile.has_children, &mut fields, "has_children");
    merge(&mut profile.pace, &mut fields, "pace");
    merge(&mut profile.start_date, &mut fields, "start_date");
    merge(
        &mut profile.relocating_state,
        &mut fields,
        "relocating_state",
    );
    merge(&mut profile.english_test, &mut fields, "english_test");
    profile
}

/// Decode a stored completion record leniently.
///
/// Entries whose value is not a boolean are dropped; a payload that is
/// not a JSON object falls back to the empty map.
pub fn decode_completion(payload: &str) -> CompletionMap {
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(payload) else {
        return CompletionMap::new();
    };
    fields
        .into_iter()
        .filter_map(|(id, value)| value.as_bool().map(|done| (id, done)))
        .collect()
}

/// Replace `slot` when the field is present and decodes; leave the
/// default in place otherwise.
fn merge<T: DeserializeOwned>(slot: &mut T, fields: &mut Map<String, Value>, key: &str) {
    if let Some(value) = fields.remove(key) {
        if let Ok(decoded) = serde_json::from_value(value) {
            *slot = decoded;
        }
    }
}
