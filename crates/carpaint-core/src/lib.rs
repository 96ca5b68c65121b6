//! Core infrastructure shared by the feature crates.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod admin;
pub mod app;
pub mod extract;
pub mod middleware;
pub mod path;
pub mod prelude;
pub mod userdata;
pub mod users;

pub use app::{App, AppBuilderOpts, AppState};
pub use extract::Auth;

#[cfg(test)]
mod test_utils;

// vim: ts=4
