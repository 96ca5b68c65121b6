//! carpaint is the backend of an auto-paint estimation tool.
//!
//! # Features
//!
//! - Token based authentication with a persistent credential store
//! - Reference data (car models, base colors, seasons) with per-user overrides
//! - Company info and license management by admins

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub use carpaint_types::auth_adapter;
pub use carpaint_types::error;
pub use carpaint_types::types;
pub use carpaint_types::worker;

// Feature crate re-exports
pub use carpaint_admin as admin;
pub use carpaint_auth as auth;
pub use carpaint_catalog as catalog;
pub use carpaint_company as company;

pub mod app;
pub mod prelude;
pub mod routes;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
