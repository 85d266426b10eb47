//! Saved-quote membership state.
//!
//! DESIGN
//! ======
//! Ids are stored in insertion order (matching the persisted JSON array)
//! but list views always resolve against the catalog, in catalog order,
//! so an id with no catalog entry is invisible rather than an error. The
//! authentication gate lives in [`SavedQuotesState::toggle`]; callers map
//! the outcome to user-visible notifications.

#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use leptos::prelude::*;

use crate::catalog::{self, Quote};
use crate::util::persistence;

/// Storage key holding the persisted saved-quote id array.
pub const SAVED_STORAGE_KEY: &str = "quotegen_saved_quotes";

/// Result of a save toggle attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The quote was added to the saved set.
    Saved,
    /// The quote was removed from the saved set.
    Removed,
    /// No mutation; the caller should prompt the user to log in.
    NeedsAuth,
}

/// Saved-quote ids, mutated only by toggle and remove.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedQuotesState {
    pub ids: Vec<String>,
}

impl SavedQuotesState {
    /// Whether `id` is currently saved.
    #[must_use]
    pub fn is_saved(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| saved == id)
    }

    /// Flip membership of `id` when authenticated; otherwise leave the
    /// set untouched and report that authentication is needed.
    pub fn toggle(&mut self, id: &str, authenticated: bool) -> ToggleOutcome {
        if !authenticated {
            return ToggleOutcome::NeedsAuth;
        }
        if self.is_saved(id) {
            self.ids.retain(|saved| saved != id);
            ToggleOutcome::Removed
        } else {
            self.ids.push(id.to_owned());
            ToggleOutcome::Saved
        }
    }

    /// Remove `id` unconditionally. No-op when absent.
    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|saved| saved != id);
    }

    /// Replace membership with the outcome of a storage read.
    pub fn restore(&mut self, stored: Option<Vec<String>>) {
        self.ids = stored.unwrap_or_default();
    }

    /// Saved catalog entries, in catalog order. Ids with no catalog entry
    /// are filtered out.
    #[must_use]
    pub fn saved_quotes(&self) -> Vec<&'static Quote> {
        catalog::all()
            .iter()
            .filter(|quote| self.is_saved(quote.id))
            .collect()
    }
}

/// Write the current id set through to storage.
pub fn persist(saved: RwSignal<SavedQuotesState>) {
    persistence::save_json(SAVED_STORAGE_KEY, &saved.get_untracked().ids);
}

/// Rehydrate saved ids from storage. Run once at client startup; a
/// missing or malformed array restores to empty.
pub fn restore(saved: RwSignal<SavedQuotesState>) {
    let stored = persistence::load_json::<Vec<String>>(SAVED_STORAGE_KEY);
    saved.update(|s| s.restore(stored));
}
