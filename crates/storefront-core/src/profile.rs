//! # Profile
//!
//! The customer's profile with edit-draft semantics: edits go to a draft
//! copy, `save` validates and promotes it, `cancel` throws it away.
//!
//! ```text
//!   Viewing ──begin_edit()──► Editing(draft) ──save()──► Viewing (draft saved)
//!      ▲                            │
//!      └────────cancel()────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::types::{ProfileUpdate, UserProfile};
use crate::validation::validate_profile;

#[derive(Debug, Clone)]
pub struct ProfileEditor {
    saved: UserProfile,
    draft: Option<UserProfile>,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile) -> Self {
        ProfileEditor {
            saved: profile,
            draft: None,
        }
    }

    /// The demo customer.
    pub fn mock() -> Self {
        Self::new(UserProfile {
            name: "Ali Ahmadi".to_string(),
            email: "ali@example.com".to_string(),
            phone: "09121234567".to_string(),
            address: "Tehran, Valiasr St, No. 123".to_string(),
            join_date: NaiveDate::from_ymd_opt(2023, 9, 6).unwrap_or_default(),
        })
    }

    /// The last saved profile.
    pub fn current(&self) -> &UserProfile {
        &self.saved
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Starts editing from the saved profile. Restarts if already editing.
    pub fn begin_edit(&mut self) -> &mut UserProfile {
        self.draft.insert(self.saved.clone())
    }

    /// The draft being edited, if any.
    pub fn draft_mut(&mut self) -> Option<&mut UserProfile> {
        self.draft.as_mut()
    }

    /// Validates the draft and makes it the saved profile.
    ///
    /// On validation failure the draft is kept so the form can be fixed.
    pub fn save(&mut self) -> CoreResult<&UserProfile> {
        let draft = self.draft.as_ref().ok_or(CoreError::NotEditing)?;
        validate_profile(draft)?;

        if let Some(draft) = self.draft.take() {
            self.saved = draft;
        }
        Ok(&self.saved)
    }

    /// Discards the draft.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Edits and saves in one step. The join date cannot change.
    pub fn update(&mut self, update: ProfileUpdate) -> CoreResult<&UserProfile> {
        let join_date = self.saved.join_date;
        *self.begin_edit() = UserProfile {
            name: update.name,
            email: update.email,
            phone: update.phone,
            address: update.address,
            join_date,
        };

        if let Err(e) = self.save().map(|_| ()) {
            self.cancel();
            return Err(e);
        }
        Ok(&self.saved)
    }
}
