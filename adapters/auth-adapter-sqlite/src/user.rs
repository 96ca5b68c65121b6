//! User records

use sqlx::{Row, SqlitePool};

use crate::crypto;
use crate::utils::*;
use carpaint_types::{auth_adapter::*, prelude::*, worker::WorkerPool};

pub(crate) async fn create_user(
	db: &SqlitePool,
	worker: &WorkerPool,
	email: &str,
	dir_name: &str,
	password: &str,
) -> ClResult<i64> {
	let password_hash = crypto::generate_password_hash(worker, password.into()).await?;

	let res = sqlx::query(
		"INSERT INTO users (email, dir_name, password) VALUES (?1, ?2, ?3) RETURNING id",
	)
	.bind(email)
	.bind(dir_name)
	.bind(password_hash.as_ref())
	.fetch_one(db)
	.await;

	match res {
		Err(ref err) if is_unique_violation_on(err, "users.dir_name") => Err(Error::Conflict(
			format!("Directory {} is already used by another user", dir_name),
		)),
		Err(ref err) if is_unique_violation(err) => {
			Err(Error::Conflict(format!("User {} already exists", email)))
		}
		res => map_res(res, |row| row.try_get("id")),
	}
}

pub(crate) async fn read_user(db: &SqlitePool, email: &str) -> ClResult<UserCtx> {
	let res = sqlx::query("SELECT id, email FROM users WHERE email = ?1").bind(email).fetch_one(db).await;

	map_res(res, |row| {
		Ok(UserCtx {
			user_id: row.try_get("id")?,
			email: row.try_get::<String, _>("email")?.into(),
		})
	})
}

pub(crate) async fn check_user_password(
	db: &SqlitePool,
	worker: &WorkerPool,
	email: &str,
	password: &str,
) -> ClResult<UserCtx> {
	let res = sqlx::query("SELECT id, email, password FROM users WHERE email = ?1")
		.bind(email)
		.fetch_one(db)
		.await;

	let (user, password_hash) = match map_res(res, |row| {
		let user = UserCtx {
			user_id: row.try_get("id")?,
			email: row.try_get::<String, _>("email")?.into(),
		};
		let password_hash: String = row.try_get("password")?;
		Ok((user, password_hash))
	}) {
		Ok(res) => res,
		Err(Error::NotFound) => return Err(Error::Unauthorized),
		Err(err) => return Err(err),
	};

	crypto::check_password(worker, password.into(), password_hash.into()).await?;
	Ok(user)
}

pub(crate) async fn update_user_password(
	db: &SqlitePool,
	worker: &WorkerPool,
	email: &str,
	password: &str,
) -> ClResult<()> {
	let password_hash = crypto::generate_password_hash(worker, password.into()).await?;

	let res = sqlx::query(
		"UPDATE users SET password = ?1, updated_at = unixepoch() WHERE email = ?2",
	)
	.bind(password_hash.as_ref())
	.bind(email)
	.execute(db)
	.await
	.inspect_err(inspect)
	.or(Err(Error::DbError))?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn list_users(db: &SqlitePool) -> ClResult<Vec<UserListItem>> {
	let rows = sqlx::query("SELECT id, email, created_at, updated_at FROM users ORDER BY id")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	collect_res(rows.iter().map(|row| {
		Ok(UserListItem {
			id: row.try_get("id")?,
			email: row.try_get::<String, _>("email")?.into(),
			created_at: Timestamp(row.try_get("created_at")?),
			updated_at: Timestamp(row.try_get("updated_at")?),
		})
	}))
}

pub(crate) async fn delete_user(db: &SqlitePool, email: &str) -> ClResult<()> {
	let res = sqlx::query("DELETE FROM users WHERE email = ?1")
		.bind(email)
		.execute(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

// vim: ts=4
