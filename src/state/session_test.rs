use super::*;

fn test_user() -> User {
    User {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        avatar_url: "/placeholder.svg".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_unauthenticated_and_loading() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_sets_user_and_authenticates() {
    let mut state = SessionState::default();
    state.login(test_user());
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("jane@example.com"));
}

#[test]
fn logout_clears_user() {
    let mut state = SessionState::default();
    state.login(test_user());
    state.logout();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn login_accepts_arbitrary_field_contents() {
    let mut state = SessionState::default();
    state.login(User {
        name: String::new(),
        email: "not-an-email".to_owned(),
        avatar_url: String::new(),
    });
    assert!(state.is_authenticated());
}

// =============================================================
// Restore (simulated reload)
// =============================================================

#[test]
fn restore_after_login_round_trips_the_user() {
    let mut state = SessionState::default();
    state.login(test_user());
    let persisted = state.user.clone();

    let mut reloaded = SessionState::default();
    reloaded.restore(persisted);
    assert_eq!(reloaded.user, Some(test_user()));
    assert!(!reloaded.loading);
}

#[test]
fn restore_after_logout_yields_no_user() {
    let mut reloaded = SessionState::default();
    reloaded.restore(None);
    assert!(reloaded.user.is_none());
    assert!(!reloaded.loading);
    assert!(!reloaded.is_authenticated());
}

#[test]
fn restore_overwrites_an_existing_user() {
    let mut state = SessionState::default();
    state.login(test_user());
    state.restore(None);
    assert!(state.user.is_none());
}

// =============================================================
// Stored payload shape
// =============================================================

#[test]
fn user_serializes_with_avatar_field_name() {
    let raw = serde_json::to_string(&test_user()).unwrap();
    assert!(raw.contains("\"avatar\":"));
    assert!(!raw.contains("avatar_url"));
}

#[test]
fn user_round_trips_through_json() {
    let raw = serde_json::to_string(&test_user()).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, test_user());
}

#[test]
fn malformed_user_payload_fails_to_parse() {
    // The storage layer maps this failure to `None`, which restores to
    // the unauthenticated default.
    assert!(serde_json::from_str::<User>("{\"name\":42}").is_err());
}
