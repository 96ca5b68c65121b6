//! Admin API handlers

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod company;
pub mod perm;
pub mod user;

mod prelude;

// vim: ts=4
