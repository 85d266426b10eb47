use super::*;

// =============================================================
// Push and ids
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("A", "first", ToastVariant::Info);
    let b = state.push("B", "second", ToastVariant::Info);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_records_title_message_and_variant() {
    let mut state = ToastState::default();
    let id = state.push("Authentication required", "Please login to save quotes", ToastVariant::Destructive);
    let toast = state.toasts.iter().find(|t| t.id == id).unwrap();
    assert_eq!(toast.title, "Authentication required");
    assert_eq!(toast.message, "Please login to save quotes");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

// =============================================================
// Bounding
// =============================================================

#[test]
fn push_evicts_oldest_past_cap() {
    let mut state = ToastState::default();
    for i in 0..=TOAST_CAP {
        state.push("T", &format!("{i}"), ToastVariant::Info);
    }
    assert_eq!(state.toasts.len(), TOAST_CAP);
    assert_eq!(state.toasts[0].message, "1");
}

// =============================================================
// Dismiss
// =============================================================

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push("A", "", ToastVariant::Info);
    let b = state.push("B", "", ToastVariant::Info);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push("A", "", ToastVariant::Info);
    state.dismiss(1234);
    assert_eq!(state.toasts.len(), 1);
}
