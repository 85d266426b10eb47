use super::*;

// =============================================================
// validate_signup
// =============================================================

#[test]
fn validate_signup_accepts_matching_passwords() {
    assert_eq!(
        validate_signup(" Jane Doe ", " jane@example.com ", "hunter2", "hunter2"),
        Ok(("Jane Doe".to_owned(), "jane@example.com".to_owned()))
    );
}

#[test]
fn validate_signup_rejects_mismatched_passwords() {
    assert_eq!(
        validate_signup("Jane", "jane@example.com", "hunter2", "hunter3"),
        Err("Passwords do not match")
    );
}

#[test]
fn validate_signup_passwords_are_compared_verbatim() {
    assert_eq!(
        validate_signup("Jane", "jane@example.com", "hunter2", "hunter2 "),
        Err("Passwords do not match")
    );
}

#[test]
fn validate_signup_requires_every_field() {
    assert_eq!(validate_signup("", "jane@example.com", "a", "a"), Err("Fill in all fields."));
    assert_eq!(validate_signup("Jane", "   ", "a", "a"), Err("Fill in all fields."));
    assert_eq!(validate_signup("Jane", "jane@example.com", "", ""), Err("Fill in all fields."));
    assert_eq!(validate_signup("Jane", "jane@example.com", "a", ""), Err("Fill in all fields."));
}

#[test]
fn validate_signup_checks_presence_before_match() {
    // A blank confirmation reads as an incomplete form, not a mismatch.
    assert_eq!(validate_signup("Jane", "jane@example.com", "hunter2", ""), Err("Fill in all fields."));
}
