//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the quote surfaces and chrome while reading/writing
//! shared state from Leptos context providers.

pub mod navbar;
pub mod quote_generator;
pub mod saved_quotes;
pub mod toast_host;
