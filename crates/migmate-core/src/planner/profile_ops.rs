//! Profile operations for the Planner.

use super::Planner;
use crate::{
    display::UpdateOutcome,
    error::{PlannerError, Result},
    models::Profile,
    params::{ResetProfile, UpdateProfile},
    store::state,
};

impl Planner {
    /// Loads the current profile, merged over defaults.
    pub async fn profile(&self) -> Result<Profile> {
        self.with_store(|store| state::load_profile(store)).await
    }

    /// Applies a validated profile patch and persists the whole profile.
    ///
    /// Validation happens before any store access, so an invalid value
    /// never reaches disk. An empty update is not an error; it reports
    /// no changes and writes nothing.
    pub async fn update_profile(&self, params: &UpdateProfile) -> Result<UpdateOutcome> {
        let patch = params.validate()?;

        self.with_store(move |store| {
            let mut profile = state::load_profile(store)?;
            let changes = patch.apply(&mut profile);
            if !changes.is_empty() {
                state::save_profile(store, &profile)?;
            }
            Ok(UpdateOutcome { profile, changes })
        })
        .await
    }

    /// Restores the profile to its defaults.
    ///
    /// Requires explicit confirmation; completion state is untouched.
    pub async fn reset_profile(&self, params: &ResetProfile) -> Result<Profile> {
        if !params.confirmed {
            return Err(PlannerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Profile reset discards every configured field. Set 'confirmed' \
                         to true to proceed."
                    .to_string(),
            });
        }

        self.with_store(|store| {
            let profile = Profile::default();
            state::save_profile(store, &profile)?;
            Ok(profile)
        })
        .await
    }
}
