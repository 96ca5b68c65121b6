//! Database schema initialization and migrations

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Get the current database version from vars table
async fn get_db_version(tx: &mut Transaction<'_, Sqlite>) -> i64 {
	sqlx::query_scalar::<_, String>("SELECT value FROM vars WHERE key = 'db_version'")
		.fetch_optional(&mut **tx)
		.await
		.ok()
		.flatten()
		.and_then(|v| v.parse().ok())
		.unwrap_or(0)
}

/// Set the database version in vars table
async fn set_db_version(tx: &mut Transaction<'_, Sqlite>, version: i64) -> Result<(), sqlx::Error> {
	sqlx::query("INSERT OR REPLACE INTO vars (key, value) VALUES ('db_version', ?)")
		.bind(version.to_string())
		.execute(&mut **tx)
		.await?;
	Ok(())
}

// Current schema version - update this when adding new migrations
const CURRENT_DB_VERSION: i64 = 1;

/// Initialize the database schema and run migrations
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Create vars table first (needed for version tracking)
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vars (
		key text NOT NULL,
		value text NOT NULL,
		created_at INTEGER DEFAULT (unixepoch()),
		updated_at INTEGER DEFAULT (unixepoch()),
		PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	let version = get_db_version(&mut tx).await;

	// Users
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
			id integer NOT NULL,
			email text NOT NULL,
			dir_name text NOT NULL,
			password text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch()),
			updated_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(id)
		)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users (email)")
		.execute(&mut *tx)
		.await?;
	// Two accounts must never share a document directory
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_dir_name ON users (dir_name)")
		.execute(&mut *tx)
		.await?;

	if version < CURRENT_DB_VERSION {
		set_db_version(&mut tx, CURRENT_DB_VERSION).await?;
	}

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
