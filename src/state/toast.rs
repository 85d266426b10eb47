//! Transient notification state.
//!
//! DESIGN
//! ======
//! Toasts are the one-way channel for operation feedback (saved, removed,
//! copied, login required). The queue is bounded so a burst of actions
//! cannot grow it without limit; the oldest entry is evicted first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Maximum number of toasts shown at once.
pub const TOAST_CAP: usize = 4;

/// How long a toast stays up before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_DURATION_MS: u64 = 3000;

/// Visual treatment of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    Destructive,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// Bounded toast queue.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast, evicting the oldest past [`TOAST_CAP`]. Returns
    /// the id for later dismissal.
    pub fn push(&mut self, title: &str, message: &str, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.toasts.len() >= TOAST_CAP {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast {
            id,
            title: title.to_owned(),
            message: message.to_owned(),
            variant,
        });
        id
    }

    /// Drop the toast with `id`, if still visible.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Show an informational toast that auto-dismisses on the client.
pub fn show(toasts: RwSignal<ToastState>, title: &str, message: &str) {
    show_with_variant(toasts, title, message, ToastVariant::Info);
}

/// Show a destructive-variant toast that auto-dismisses on the client.
pub fn show_destructive(toasts: RwSignal<ToastState>, title: &str, message: &str) {
    show_with_variant(toasts, title, message, ToastVariant::Destructive);
}

fn show_with_variant(toasts: RwSignal<ToastState>, title: &str, message: &str, variant: ToastVariant) {
    let id = toasts
        .try_update(|t| t.push(title, message, variant))
        .unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
