//! App state type

use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use crate::admin::AdminRegistry;
use crate::path::PathConfig;
use crate::prelude::*;
use crate::userdata;

use carpaint_types::auth_adapter::AuthAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub admins: AdminRegistry,
	pub auth_adapter: Arc<dyn AuthAdapter>,
}

impl AppState {
	/// Reference data paths without any per-user redefinition
	pub fn data_paths(&self) -> PathConfig {
		PathConfig::new(&*self.opts.origin_dir)
	}

	/// Reference data paths with the user's `override/` directory layered on top
	pub fn user_paths(&self, email: &str) -> ClResult<PathConfig> {
		let user_dir = self.user_dir(email)?;
		Ok(self.data_paths().with_override(user_dir.join(userdata::OVERRIDE_DIR)))
	}

	/// Root of the per-user document tree
	pub fn user_dir(&self, email: &str) -> ClResult<PathBuf> {
		userdata::user_dir(&self.opts.user_data_dir, email)
	}
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	/// Read-only reference data root
	pub origin_dir: Box<Path>,
	/// Root of the per-user directory trees
	pub user_data_dir: Box<Path>,
	pub admins_file: Box<Path>,
	pub users_initial_file: Box<Path>,
	/// Static frontend served as router fallback
	pub dist_dir: Option<Box<Path>>,
}

// vim: ts=4
