//! Per-user document tree: `<user_data>/<dir name>/{logs,licenses,override,info}`

use std::path::{Path, PathBuf};

use crate::prelude::*;

pub const LOGS_DIR: &str = "logs";
pub const LICENSES_DIR: &str = "licenses";
pub const OVERRIDE_DIR: &str = "override";
pub const INFO_DIR: &str = "info";

const USER_SUBDIRS: [&str; 4] = [LOGS_DIR, LICENSES_DIR, OVERRIDE_DIR, INFO_DIR];

/// Turns an email into a file-system safe directory name.
///
/// `a@b.com` becomes `a-at-b-dot-com`. Runs of other characters collapse into one `-`.
pub fn email_to_dir_name(email: &str) -> String {
	let expanded = email.to_lowercase().replace('@', "--at--").replace('.', "-dot-");

	let mut name = String::with_capacity(expanded.len());
	let mut last_hyphen = false;
	for ch in expanded.chars() {
		if ch.is_alphanumeric() {
			name.push(ch);
			last_hyphen = false;
		} else if !last_hyphen {
			name.push('-');
			last_hyphen = true;
		}
	}

	name.trim_matches('-').to_string()
}

/// Like `email_to_dir_name`, but an email that maps to nothing is rejected.
pub fn dir_name(email: &str) -> ClResult<String> {
	let dir_name = email_to_dir_name(email);
	if dir_name.is_empty() {
		return Err(Error::ValidationError(format!("invalid email: {:?}", email)));
	}
	Ok(dir_name)
}

pub fn user_dir(user_data_dir: &Path, email: &str) -> ClResult<PathBuf> {
	Ok(user_data_dir.join(dir_name(email)?))
}

/// Creates the user's directory tree. Existing directories are left alone.
pub async fn create_user_dirs(user_data_dir: &Path, email: &str) -> ClResult<PathBuf> {
	let dir = user_dir(user_data_dir, email)?;
	for sub in USER_SUBDIRS {
		tokio::fs::create_dir_all(dir.join(sub)).await?;
	}
	Ok(dir)
}


// vim: ts=4
