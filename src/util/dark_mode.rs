//! Dark mode preference persistence and application.
//!
//! The preference lives under its own `localStorage` key and is applied as
//! a `data-theme` attribute on the `<html>` element. With no stored
//! preference the system color scheme decides. Browser-only; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "quotegen_dark";

/// Read the effective dark-mode preference.
#[must_use]
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        match stored {
            Some(value) => value == "true",
            None => window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .is_some_and(|mq| mq.matches()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set the `data-theme` attribute on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the preference, apply it, and persist the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
