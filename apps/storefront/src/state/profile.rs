//! # Profile State
//!
//! The signed-in customer's profile editor behind `Arc<Mutex<T>>`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_core::ProfileEditor;

#[derive(Debug, Clone)]
pub struct ProfileState {
    editor: Arc<Mutex<ProfileEditor>>,
}

impl ProfileState {
    pub fn new(editor: ProfileEditor) -> Self {
        ProfileState {
            editor: Arc::new(Mutex::new(editor)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProfileEditor> {
        self.editor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_editor<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProfileEditor) -> R,
    {
        f(&mut self.lock())
    }
}

impl Default for ProfileState {
    /// The demo customer.
    fn default() -> Self {
        Self::new(ProfileEditor::mock())
    }
}
