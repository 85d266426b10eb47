//! Client state stores.
//!
//! ARCHITECTURE
//! ============
//! Each store is a plain struct with pure transitions, wrapped in an
//! `RwSignal` created and provided via context by the composition root.
//! Signal-level helpers pair each mutation with its storage write so
//! persistence cannot drift from in-memory state.

pub mod saved;
pub mod session;
pub mod toast;
