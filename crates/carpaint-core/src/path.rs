//! Overlay path resolution.
//!
//! Every logical resource path is looked up in the optional redefinition
//! (override) directory first and in the origin directory second.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::prelude::*;

#[derive(Clone, Debug)]
pub struct PathConfig {
	origin: PathBuf,
	redefinition: Option<PathBuf>,
}

impl PathConfig {
	pub fn new(origin: impl Into<PathBuf>) -> Self {
		Self { origin: origin.into(), redefinition: None }
	}

	pub fn with_override(mut self, redefinition: impl Into<PathBuf>) -> Self {
		self.redefinition = Some(redefinition.into());
		self
	}

	pub fn origin(&self) -> &Path {
		&self.origin
	}

	pub fn redefinition(&self) -> Option<&Path> {
		self.redefinition.as_deref()
	}

	/// Resolve a logical path to an existing file, override first.
	pub async fn resolve(&self, rel: impl AsRef<Path>) -> ClResult<PathBuf> {
		let rel = rel.as_ref();
		check_logical_path(rel)?;

		if let Some(redefinition) = &self.redefinition {
			let candidate = redefinition.join(rel);
			if exists(&candidate).await {
				debug!("resolved {} from override", rel.display());
				return Ok(candidate);
			}
		}

		let candidate = self.origin.join(rel);
		if exists(&candidate).await {
			return Ok(candidate);
		}

		Err(Error::NotFound)
	}

	/// Names of the files in `dir` ending with `suffix`, with the suffix
	/// stripped, merged over origin and override, sorted and deduplicated.
	pub async fn list_distinct_with_suffix(
		&self,
		dir: impl AsRef<Path>,
		suffix: &str,
	) -> ClResult<Vec<String>> {
		let dir = dir.as_ref();
		check_logical_path(dir)?;

		let mut names = BTreeSet::new();
		let mut found = collect_with_suffix(&self.origin.join(dir), suffix, &mut names).await?;
		if let Some(redefinition) = &self.redefinition {
			found |= collect_with_suffix(&redefinition.join(dir), suffix, &mut names).await?;
		}

		if !found {
			return Err(Error::NotFound);
		}
		Ok(names.into_iter().collect())
	}
}

/// Logical paths stay below the data roots
fn check_logical_path(rel: &Path) -> ClResult<()> {
	if rel.as_os_str().is_empty() {
		return Err(Error::ValidationError("empty resource path".into()));
	}
	for component in rel.components() {
		match component {
			Component::Normal(_) | Component::CurDir => {}
			Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
				warn!("rejected resource path {}", rel.display());
				return Err(Error::ValidationError("invalid resource path".into()));
			}
		}
	}
	Ok(())
}

async fn exists(path: &Path) -> bool {
	tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Returns false if the directory does not exist
async fn collect_with_suffix(
	dir: &Path,
	suffix: &str,
	names: &mut BTreeSet<String>,
) -> ClResult<bool> {
	let mut entries = match tokio::fs::read_dir(dir).await {
		Ok(entries) => entries,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(false),
		Err(err) => return Err(err.into()),
	};

	while let Some(entry) = entries.next_entry().await? {
		if !entry.file_type().await?.is_file() {
			continue;
		}
		let file_name = entry.file_name();
		let Some(file_name) = file_name.to_str() else {
			continue;
		};
		if let Some(name) = file_name.strip_suffix(suffix) {
			if !name.is_empty() {
				names.insert(name.to_string());
			}
		}
	}

	Ok(true)
}


// vim: ts=4
