//! Key-value variables stored next to the user table

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use carpaint_types::prelude::*;

const JWT_SECRET_KEY: &str = "0:jwt_secret";

/// Read a variable
pub(crate) async fn read_var(db: &SqlitePool, key: &str) -> ClResult<Box<str>> {
	let res = sqlx::query("SELECT value FROM vars WHERE key = ?1").bind(key).fetch_one(db).await;

	map_res(res, |row| row.try_get("value"))
}

/// Insert or replace a variable
pub(crate) async fn update_var(db: &SqlitePool, key: &str, value: &str) -> ClResult<()> {
	sqlx::query(
		"INSERT OR REPLACE INTO vars (key, value, updated_at) VALUES (?1, ?2, unixepoch())",
	)
	.bind(key)
	.bind(value)
	.execute(db)
	.await
	.inspect_err(inspect)
	.or(Err(Error::DbError))?;
	Ok(())
}

/// Get or generate the JWT secret for HS256 signing
pub(crate) async fn ensure_jwt_secret(db: &SqlitePool) -> ClResult<Box<str>> {
	match read_var(db, JWT_SECRET_KEY).await {
		Ok(secret) => return Ok(secret),
		Err(Error::NotFound) => {}
		Err(err) => return Err(err),
	}

	// 32 random bytes, base64 encoded
	use base64::Engine;
	use rand::Rng;
	let mut secret_bytes = [0u8; 32];
	rand::rng().fill_bytes(&mut secret_bytes);
	let secret_str = base64::engine::general_purpose::STANDARD.encode(secret_bytes);

	update_var(db, JWT_SECRET_KEY, &secret_str).await?;

	info!("Generated new JWT secret");
	Ok(secret_str.into())
}

// vim: ts=4
