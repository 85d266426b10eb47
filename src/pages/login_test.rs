use super::*;

// =============================================================
// validate_login
// =============================================================

#[test]
fn validate_login_trims_both_fields() {
    assert_eq!(
        validate_login("  user@example.com  ", " hunter2 "),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_requires_email() {
    assert_eq!(validate_login("   ", "hunter2"), Err("Enter both email and password."));
}

#[test]
fn validate_login_requires_password() {
    assert_eq!(validate_login("user@example.com", ""), Err("Enter both email and password."));
}

// =============================================================
// display_name_from_email
// =============================================================

#[test]
fn display_name_capitalizes_local_part() {
    assert_eq!(display_name_from_email("jane@example.com"), "Jane");
}

#[test]
fn display_name_keeps_remaining_characters() {
    assert_eq!(display_name_from_email("jane.doe@example.com"), "Jane.doe");
}

#[test]
fn display_name_without_at_sign_uses_whole_value() {
    assert_eq!(display_name_from_email("jane"), "Jane");
}

#[test]
fn display_name_of_empty_local_part_is_empty() {
    assert_eq!(display_name_from_email("@example.com"), "");
}
