pub use carpaint_core::prelude::*;

// vim: ts=4
