//! Shared types, adapter traits, and core utilities for the carpaint backend.
//!
//! Kept apart from the server crates so that adapter implementations only
//! depend on this crate.

pub mod auth_adapter;
pub mod error;
pub mod extract;
pub mod prelude;
pub mod types;
pub mod worker;

// vim: ts=4
