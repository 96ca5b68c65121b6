//! Reference data readers and their handlers.
//!
//! All files are located through the overlay `PathConfig`, so a user's
//! `override/` directory can redefine any catalog file.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod cars;
pub mod colors;
pub mod handler;
pub mod seasons;

mod prelude;
mod yaml;

// vim: ts=4
