//! Session state for the current browser user.
//!
//! DESIGN
//! ======
//! The session is an explicit store created by the composition root and
//! provided via context; components hold only the signal. Login, logout,
//! and restore are the only mutations, and each writes through to
//! `localStorage` synchronously so a reload always rehydrates the last
//! state. There is no real authentication behind any of this.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::persistence;

/// Storage key holding the persisted user record.
pub const USER_STORAGE_KEY: &str = "quotegen_user";

/// A mock account created by the login or signup form.
///
/// The stored payload keeps the `avatar` field name, so records written
/// before the field was renamed in code still parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

/// Session state tracking the current user and restore status.
///
/// `loading` stays true until the client-side restore pass has run, so
/// redirect guards never bounce a user whose record simply has not been
/// read yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// True iff a user record is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Set the current user. Accepts any field contents.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Clear the current user.
    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Apply the outcome of a storage read and mark restore complete.
    pub fn restore(&mut self, stored: Option<User>) {
        self.user = stored;
        self.loading = false;
    }
}

/// Log in and write the user record through to storage.
pub fn login(session: RwSignal<SessionState>, user: User) {
    persistence::save_json(USER_STORAGE_KEY, &user);
    session.update(|s| s.login(user));
}

/// Log out and remove the persisted record.
pub fn logout(session: RwSignal<SessionState>) {
    persistence::remove(USER_STORAGE_KEY);
    session.update(SessionState::logout);
}

/// Rehydrate the session from storage. Run once at client startup; a
/// missing or malformed record leaves the session unauthenticated.
pub fn restore(session: RwSignal<SessionState>) {
    let stored = persistence::load_json::<User>(USER_STORAGE_KEY);
    session.update(|s| s.restore(stored));
}
