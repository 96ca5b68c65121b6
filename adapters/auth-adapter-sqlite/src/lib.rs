//! SQLite implementation of the `AuthAdapter`: user records, bcrypt password
//! hashes and HS256 access tokens.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::{fmt::Debug, path::Path, sync::Arc};

use carpaint_types::{auth_adapter::*, prelude::*, worker::WorkerPool};

mod crypto;
mod schema;
mod user;
mod utils;
mod variable;

pub struct AuthAdapterSqlite {
	db: SqlitePool,
	worker: Arc<WorkerPool>,
	jwt_secret: Box<str>,
}

impl Debug for AuthAdapterSqlite {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthAdapterSqlite").field("db", &self.db).finish_non_exhaustive()
	}
}

impl AuthAdapterSqlite {
	/// Opens (or creates) `auth.db` in `db_dir`.
	///
	/// When `jwt_secret` is `None` the secret stored in the database is used,
	/// generating one on first start.
	pub async fn new(
		worker: Arc<WorkerPool>,
		db_dir: impl AsRef<Path>,
		jwt_secret: Option<&str>,
	) -> ClResult<Self> {
		tokio::fs::create_dir_all(db_dir.as_ref()).await?;
		let db_path = db_dir.as_ref().join("auth.db");

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(&db_path)
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		let jwt_secret = match jwt_secret {
			Some(secret) if !secret.is_empty() => Box::from(secret),
			_ => variable::ensure_jwt_secret(&db).await?,
		};

		Ok(Self { db, worker, jwt_secret })
	}
}

#[async_trait]
impl AuthAdapter for AuthAdapterSqlite {
	// Users
	//*******
	async fn create_user(&self, email: &str, dir_name: &str, password: &str) -> ClResult<i64> {
		user::create_user(&self.db, &self.worker, email, dir_name, password).await
	}

	async fn check_user_password(&self, email: &str, password: &str) -> ClResult<UserCtx> {
		user::check_user_password(&self.db, &self.worker, email, password).await
	}

	async fn update_user_password(&self, email: &str, password: &str) -> ClResult<()> {
		user::update_user_password(&self.db, &self.worker, email, password).await
	}

	async fn read_user(&self, email: &str) -> ClResult<UserCtx> {
		user::read_user(&self.db, email).await
	}

	async fn list_users(&self) -> ClResult<Vec<UserListItem>> {
		user::list_users(&self.db).await
	}

	async fn delete_user(&self, email: &str) -> ClResult<()> {
		user::delete_user(&self.db, email).await
	}

	// Tokens
	//********
	async fn create_access_token(&self, email: &str) -> ClResult<Box<str>> {
		let access_token =
			AccessToken { email: Box::from(email), exp: Timestamp::from_now(ACCESS_TOKEN_EXPIRY) };
		crypto::generate_access_token(&self.worker, access_token, self.jwt_secret.clone()).await
	}

	async fn validate_access_token(&self, token: &str) -> ClResult<AccessToken<Box<str>>> {
		crypto::validate_access_token(&self.worker, token.into(), self.jwt_secret.clone()).await
	}
}

// vim: ts=4
