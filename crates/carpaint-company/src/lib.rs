//! Company information and licenses.
//!
//! Everything lives in the user's directory tree: `info/company.json`,
//! `logs/infoupdate.log` and one `licenses/<YYYYMMDDHHMMSS>.json` per issued license.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod handler;
pub mod store;
pub mod types;

mod prelude;

// vim: ts=4
