//! Utility functions for database operations

use sqlx::sqlite::SqliteRow;

use carpaint_types::prelude::*;

/// Log database errors
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a query result to a value using a closure
pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> ClResult<T>
where
	F: FnOnce(&SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(ref row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Collect result iterator into a vector
pub(crate) fn collect_res<T>(iter: impl Iterator<Item = Result<T, sqlx::Error>>) -> ClResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

/// True if the error is a UNIQUE constraint violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
	matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// True if the error is a UNIQUE violation on `column` (given as `table.column`)
pub(crate) fn is_unique_violation_on(err: &sqlx::Error, column: &str) -> bool {
	matches!(err, sqlx::Error::Database(db_err)
		if db_err.is_unique_violation() && db_err.message().contains(column))
}

// vim: ts=4
