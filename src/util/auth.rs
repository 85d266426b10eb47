//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that require a logged-in user apply identical
//! unauthenticated redirect behavior through this helper.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to `/login` whenever the session has finished restoring and no
/// user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
