//! App builder - constructs and runs the carpaint application

use std::{path::PathBuf, sync::Arc};

use crate::auth_adapter::AuthAdapter;
use crate::prelude::*;
use crate::routes;
use carpaint_core::admin::AdminRegistry;
pub use carpaint_core::app::{App, AppBuilderOpts, AppState, VERSION};
use carpaint_core::users;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	auth_adapter: Option<Arc<dyn AuthAdapter>>,
}

impl AppBuilder {
	/// Also installs the tracing subscriber, so adapters opened after this log normally.
	pub fn new() -> Self {
		if tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init()
			.is_err()
		{
			debug!("tracing subscriber already installed");
		}
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				origin_dir: PathBuf::from("../data").into(),
				user_data_dir: PathBuf::from("../userdata/").into(),
				admins_file: PathBuf::from("admins.txt").into(),
				users_initial_file: PathBuf::from("users_initial.json").into(),
				dist_dir: None,
			},
			auth_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn origin_dir(&mut self, origin_dir: impl Into<Box<std::path::Path>>) -> &mut Self {
		self.opts.origin_dir = origin_dir.into();
		self
	}
	pub fn user_data_dir(&mut self, user_data_dir: impl Into<Box<std::path::Path>>) -> &mut Self {
		self.opts.user_data_dir = user_data_dir.into();
		self
	}
	pub fn admins_file(&mut self, admins_file: impl Into<Box<std::path::Path>>) -> &mut Self {
		self.opts.admins_file = admins_file.into();
		self
	}
	pub fn users_initial_file(
		&mut self,
		users_initial_file: impl Into<Box<std::path::Path>>,
	) -> &mut Self {
		self.opts.users_initial_file = users_initial_file.into();
		self
	}
	pub fn dist_dir(&mut self, dist_dir: impl Into<Box<std::path::Path>>) -> &mut Self {
		self.opts.dist_dir = Some(dist_dir.into());
		self
	}

	// Adapters
	pub fn auth_adapter(&mut self, auth_adapter: Arc<dyn AuthAdapter>) -> &mut Self {
		self.auth_adapter = Some(auth_adapter);
		self
	}

	/// Prepares data directories, loads the admin list and seeds initial users.
	pub async fn build(self) -> ClResult<App> {
		let Some(auth_adapter) = self.auth_adapter else {
			error!("FATAL: No auth adapter configured");
			return Err(Error::Internal("No auth adapter configured".to_string()));
		};

		for dir in [&self.opts.origin_dir, &self.opts.user_data_dir] {
			tokio::fs::create_dir_all(dir).await.map_err(|err| {
				error!("FATAL: Cannot create directory {}: {}", dir.display(), err);
				Error::from(err)
			})?;
		}

		let app: App = Arc::new(AppState {
			opts: self.opts,
			admins: AdminRegistry::new(),
			auth_adapter,
		});

		match app.admins.load_file(&app.opts.admins_file).await {
			Ok(count) => info!("Loaded {} admin(s) from {}", count, app.opts.admins_file.display()),
			Err(err) => {
				error!("FATAL: Cannot load admins from {}: {}", app.opts.admins_file.display(), err);
				return Err(err);
			}
		}

		match users::load_initial_users_file(&app, &app.opts.users_initial_file).await {
			Ok(created) => info!("Registered {} initial user(s)", created),
			Err(err) => warn!(
				"Skipping initial users from {}: {}",
				app.opts.users_initial_file.display(),
				err
			),
		}

		Ok(app)
	}

	pub async fn run(self) -> ClResult<()> {
		info!("carpaint V{}", VERSION);

		let app = self.build().await?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(&*app.opts.listen).await.map_err(|err| {
			error!("FATAL: Cannot listen on {}: {}", app.opts.listen, err);
			Error::from(err)
		})?;
		info!("Listening on {}", app.opts.listen);

		axum::serve(listener, router).await?;
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
