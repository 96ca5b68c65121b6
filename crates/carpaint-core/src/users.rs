//! User account services on top of the `AuthAdapter`

use std::{collections::BTreeMap, path::Path};

use crate::prelude::*;
use crate::userdata;

fn validate_credentials(email: &str, password: &str) -> ClResult<()> {
	if email.trim().is_empty() {
		return Err(Error::ValidationError("email is required".into()));
	}
	if password.is_empty() {
		return Err(Error::ValidationError("password is required".into()));
	}
	Ok(())
}

/// Creates the user record, then the user's directory tree.
///
/// Emails that map to a directory already owned by another account are a
/// `Conflict`. A failure to create the directories is reported as
/// `Error::Internal`; the user record is kept.
pub async fn register_user(app: &App, email: &str, password: &str) -> ClResult<i64> {
	validate_credentials(email, password)?;
	let dir_name = userdata::dir_name(email)?;

	let user_id = app.auth_adapter.create_user(email, &dir_name, password).await?;

	userdata::create_user_dirs(&app.opts.user_data_dir, email).await.map_err(|err| {
		error!(email = %email, "failed to create user directories: {}", err);
		Error::Internal(format!("failed to create directories for {}", email))
	})?;

	info!(email = %email, user_id, "user registered");
	Ok(user_id)
}

/// Never fails: any lookup or verification problem is `false`.
pub async fn authenticate(app: &App, email: &str, password: &str) -> bool {
	app.auth_adapter.check_user_password(email, password).await.is_ok()
}

/// Changes a user's own password after re-checking the current one.
/// An unknown user is `NotFound`, a wrong current password `Unauthorized`.
pub async fn change_password(
	app: &App,
	email: &str,
	current_password: &str,
	new_password: &str,
) -> ClResult<()> {
	if new_password.is_empty() {
		return Err(Error::ValidationError("new password is required".into()));
	}
	app.auth_adapter.read_user(email).await?;
	app.auth_adapter.check_user_password(email, current_password).await?;
	app.auth_adapter.update_user_password(email, new_password).await?;
	info!(email = %email, "password changed");
	Ok(())
}

/// Administrative password reset, no current password needed.
pub async fn set_password(app: &App, email: &str, new_password: &str) -> ClResult<()> {
	validate_credentials(email, new_password)?;
	app.auth_adapter.update_user_password(email, new_password).await?;
	info!(email = %email, "password reset by admin");
	Ok(())
}

/// Registers a seed set of users. Existing users are skipped.
///
/// Returns the number of newly registered users.
pub async fn load_initial_users(app: &App, users: &BTreeMap<String, String>) -> usize {
	let mut created = 0;
	for (email, password) in users {
		match register_user(app, email, password).await {
			Ok(_) => created += 1,
			Err(Error::Conflict(_)) => debug!(email = %email, "initial user already exists"),
			Err(err) => warn!(email = %email, "failed to register initial user: {}", err),
		}
	}
	created
}

/// Reads an `email -> password` JSON map and registers it.
pub async fn load_initial_users_file(app: &App, path: &Path) -> ClResult<usize> {
	let content = tokio::fs::read_to_string(path).await?;
	let users: BTreeMap<String, String> = serde_json::from_str(&content)?;
	Ok(load_initial_users(app, &users).await)
}


// vim: ts=4
