pub use crate::app::App;
pub use carpaint_types::prelude::*;

// vim: ts=4
