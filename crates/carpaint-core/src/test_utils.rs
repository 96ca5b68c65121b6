//! In-memory `AuthAdapter` for unit tests. Passwords are stored in clear and
//! tokens are `token:<email>`.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::{collections::BTreeMap, sync::Arc};
use tempfile::TempDir;

use crate::admin::AdminRegistry;
use crate::app::{AppBuilderOpts, AppState};
use crate::prelude::*;
use carpaint_types::auth_adapter::*;

#[derive(Debug)]
struct MockUser {
	dir_name: String,
	password: String,
}

#[derive(Debug, Default)]
pub struct MockAuthAdapter {
	users: Mutex<BTreeMap<String, MockUser>>,
}

impl MockAuthAdapter {
	pub fn with_users(emails: &[&str]) -> Self {
		let users = emails
			.iter()
			.map(|e| {
				let user = MockUser {
					dir_name: crate::userdata::email_to_dir_name(e),
					password: "pw".to_string(),
				};
				((*e).to_string(), user)
			})
			.collect();
		Self { users: Mutex::new(users) }
	}

	fn ctx(id: usize, email: &str) -> UserCtx {
		UserCtx { user_id: i64::try_from(id).unwrap_or_default() + 1, email: email.into() }
	}
}

#[async_trait]
impl AuthAdapter for MockAuthAdapter {
	async fn create_user(&self, email: &str, dir_name: &str, password: &str) -> ClResult<i64> {
		let mut users = self.users.lock();
		if users.contains_key(email) {
			return Err(Error::Conflict(format!("User {} already exists", email)));
		}
		if users.values().any(|user| user.dir_name == dir_name) {
			return Err(Error::Conflict(format!("Directory {} is already used", dir_name)));
		}
		let user = MockUser { dir_name: dir_name.to_string(), password: password.to_string() };
		users.insert(email.to_string(), user);
		Ok(i64::try_from(users.len()).unwrap_or_default())
	}

	async fn check_user_password(&self, email: &str, password: &str) -> ClResult<UserCtx> {
		let users = self.users.lock();
		match users.iter().enumerate().find(|(_, (e, _))| e.as_str() == email) {
			Some((id, (_, user))) if user.password == password => Ok(Self::ctx(id, email)),
			_ => Err(Error::Unauthorized),
		}
	}

	async fn update_user_password(&self, email: &str, password: &str) -> ClResult<()> {
		let mut users = self.users.lock();
		let user = users.get_mut(email).ok_or(Error::NotFound)?;
		user.password = password.to_string();
		Ok(())
	}

	async fn read_user(&self, email: &str) -> ClResult<UserCtx> {
		let users = self.users.lock();
		users
			.keys()
			.position(|e| e == email)
			.map(|id| Self::ctx(id, email))
			.ok_or(Error::NotFound)
	}

	async fn list_users(&self) -> ClResult<Vec<UserListItem>> {
		let users = self.users.lock();
		Ok(users
			.keys()
			.enumerate()
			.map(|(id, email)| UserListItem {
				id: i64::try_from(id).unwrap_or_default() + 1,
				email: email.as_str().into(),
				created_at: Timestamp(0),
				updated_at: Timestamp(0),
			})
			.collect())
	}

	async fn delete_user(&self, email: &str) -> ClResult<()> {
		self.users.lock().remove(email).map(|_| ()).ok_or(Error::NotFound)
	}

	async fn create_access_token(&self, email: &str) -> ClResult<Box<str>> {
		Ok(format!("token:{}", email).into())
	}

	async fn validate_access_token(&self, token: &str) -> ClResult<AccessToken<Box<str>>> {
		let email = token.strip_prefix("token:").ok_or(Error::Unauthorized)?;
		Ok(AccessToken { email: email.into(), exp: Timestamp::from_now(ACCESS_TOKEN_EXPIRY) })
	}
}

/// App over a temporary data directory (`origin/`, `userdata/`)
pub fn test_app(adapter: MockAuthAdapter) -> (App, TempDir) {
	let tmp = TempDir::new().expect("tmp dir");
	let opts = AppBuilderOpts {
		listen: "127.0.0.1:0".into(),
		origin_dir: tmp.path().join("origin").into(),
		user_data_dir: tmp.path().join("userdata").into(),
		admins_file: tmp.path().join("admins.txt").into(),
		users_initial_file: tmp.path().join("users_initial.json").into(),
		dist_dir: None,
	};
	let app = Arc::new(AppState { opts, admins: AdminRegistry::new(), auth_adapter: Arc::new(adapter) });
	(app, tmp)
}

// vim: ts=4
