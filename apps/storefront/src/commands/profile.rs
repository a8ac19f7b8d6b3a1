//! # Profile Commands

use storefront_core::{ProfileUpdate, UserProfile};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ProfileState;

/// The saved profile.
pub fn get_profile(profile: &ProfileState) -> UserProfile {
    debug!("get_profile command");
    profile.with_editor(|e| e.current().clone())
}

/// Validates and saves an edited profile.
///
/// The join date is kept from the saved profile. On error the saved profile
/// is unchanged.
pub fn update_profile(profile: &ProfileState, update: ProfileUpdate) -> Result<UserProfile, ApiError> {
    debug!("update_profile command");

    let saved = profile.with_editor(|e| e.update(update).cloned())?;
    info!("profile updated");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_update_profile() {
        let state = ProfileState::default();

        let mut edit = ProfileUpdate::from(&get_profile(&state));
        edit.email = "ali.ahmadi@example.com".to_string();

        let saved = update_profile(&state, edit).unwrap();
        assert_eq!(saved.email, "ali.ahmadi@example.com");
        assert_eq!(get_profile(&state).email, "ali.ahmadi@example.com");
    }

    #[test]
    fn test_invalid_update_is_rejected() {
        let state = ProfileState::default();

        let mut edit = ProfileUpdate::from(&get_profile(&state));
        edit.phone = "not a phone".to_string();

        let err = update_profile(&state, edit).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_profile(&state).phone, "09121234567");
    }
}
