//! Adapter that stores user credentials and issues access tokens.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::{prelude::*, types::serialize_timestamp_iso};

/// Access token lifetime in seconds (24h)
pub const ACCESS_TOKEN_EXPIRY: i64 = 86400;

/// Claims of an access token
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccessToken<S> {
	pub email: S,
	pub exp: Timestamp,
}

/// An authenticated user, as attached to a request
#[derive(Clone, Debug)]
pub struct UserCtx {
	pub user_id: i64,
	pub email: Box<str>,
}

/// User record as listed for administrators. Never carries the password hash.
#[derive(Clone, Debug, Serialize)]
pub struct UserListItem {
	pub id: i64,
	pub email: Box<str>,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub created_at: Timestamp,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub updated_at: Timestamp,
}

#[async_trait]
pub trait AuthAdapter: Debug + Send + Sync {
	// Users
	/// Creates a user with a hashed password. `dir_name` names the user's document
	/// directory. Fails with `Error::Conflict` if the email or the directory is taken.
	async fn create_user(&self, email: &str, dir_name: &str, password: &str) -> ClResult<i64>;

	/// Verifies a password. Any failure (unknown user or mismatch) is `Error::Unauthorized`.
	async fn check_user_password(&self, email: &str, password: &str) -> ClResult<UserCtx>;

	/// Replaces the password hash of an existing user. `Error::NotFound` if absent.
	async fn update_user_password(&self, email: &str, password: &str) -> ClResult<()>;

	async fn read_user(&self, email: &str) -> ClResult<UserCtx>;
	async fn list_users(&self) -> ClResult<Vec<UserListItem>>;

	/// Removes the user record. `Error::NotFound` if absent.
	async fn delete_user(&self, email: &str) -> ClResult<()>;

	// Tokens
	async fn create_access_token(&self, email: &str) -> ClResult<Box<str>>;

	/// Checks signature and expiry. Every failure is reported as `Error::Unauthorized`.
	async fn validate_access_token(&self, token: &str) -> ClResult<AccessToken<Box<str>>>;
}

// vim: ts=4
