//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`.

pub mod home;
pub mod login;
pub mod profile;
pub mod signup;

/// Avatar assigned to mock accounts; there is no upload flow.
pub(crate) const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";
