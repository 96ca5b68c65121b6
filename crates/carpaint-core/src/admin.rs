//! Admin registry: the static set of admin emails, loaded once at startup.

use parking_lot::RwLock;
use std::{collections::HashSet, path::Path};

use crate::prelude::*;

#[derive(Debug, Default)]
pub struct AdminRegistry {
	admins: RwLock<Option<HashSet<Box<str>>>>,
}

impl AdminRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// One-time load. A second load is an error; restart to pick up changes.
	pub fn load<I, S>(&self, emails: I) -> ClResult<usize>
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		let mut admins = self.admins.write();
		if admins.is_some() {
			return Err(Error::Internal("admin registry already loaded".into()));
		}
		let set: HashSet<Box<str>> = emails.into_iter().map(Into::into).collect();
		let count = set.len();
		*admins = Some(set);
		Ok(count)
	}

	/// Loads a line-delimited admin list. Lines are trimmed, empty lines skipped.
	pub async fn load_file(&self, path: &Path) -> ClResult<usize> {
		let content = tokio::fs::read_to_string(path).await.map_err(|err| {
			Error::ConfigError(format!("cannot read admin file {}: {}", path.display(), err))
		})?;
		self.load(parse_admin_list(&content))
	}

	pub fn is_loaded(&self) -> bool {
		self.admins.read().is_some()
	}

	pub fn is_admin(&self, email: &str) -> bool {
		self.admins.read().as_ref().is_some_and(|admins| admins.contains(email))
	}
}

pub fn parse_admin_list(content: &str) -> impl Iterator<Item = &str> {
	content.lines().map(str::trim).filter(|line| !line.is_empty())
}


// vim: ts=4
