use std::{env, path, process::ExitCode, sync::Arc};

use carpaint::worker::WorkerPool;
use carpaint_auth_adapter_sqlite::AuthAdapterSqlite;
use tracing::error;

pub struct Config {
	pub listen: String,
	pub origin_dir: path::PathBuf,
	pub user_data_dir: path::PathBuf,
	pub db_dir: path::PathBuf,
	pub admins_file: path::PathBuf,
	pub users_initial_file: path::PathBuf,
	pub jwt_secret: Option<String>,
	pub dist_dir: Option<path::PathBuf>,
}

fn var_or(name: &str, default: &str) -> String {
	env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
	fn from_env() -> Self {
		Config {
			listen: var_or("LISTEN", "127.0.0.1:8080"),
			origin_dir: var_or("CPNTR_ORIGIN_DATA_PATH", "../data").into(),
			user_data_dir: var_or("CPNTR_USER_DATA_PATH", "../userdata/").into(),
			db_dir: var_or("DB_DIR", "./data").into(),
			admins_file: var_or("ADMINS_FILE", "admins.txt").into(),
			users_initial_file: var_or("USERS_INITIAL_FILE", "users_initial.json").into(),
			jwt_secret: env::var("JWT_SECRET").ok().filter(|secret| !secret.is_empty()),
			dist_dir: env::var("DIST_DIR").ok().map(Into::into),
		}
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let config = Config::from_env();
	// Installs logging before the adapter is opened
	let mut builder = carpaint::AppBuilder::new();
	let worker = Arc::new(WorkerPool::new(1, 2));

	let auth_adapter =
		match AuthAdapterSqlite::new(worker, &config.db_dir, config.jwt_secret.as_deref()).await {
			Ok(adapter) => adapter,
			Err(err) => {
				error!("FATAL: cannot open auth database in {}: {}", config.db_dir.display(), err);
				return ExitCode::FAILURE;
			}
		};

	builder
		.listen(config.listen)
		.origin_dir(config.origin_dir)
		.user_data_dir(config.user_data_dir)
		.admins_file(config.admins_file)
		.users_initial_file(config.users_initial_file)
		.auth_adapter(Arc::new(auth_adapter));
	if let Some(dist_dir) = config.dist_dir {
		builder.dist_dir(dist_dir);
	}

	match builder.run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(_) => ExitCode::FAILURE,
	}
}

// vim: ts=4
