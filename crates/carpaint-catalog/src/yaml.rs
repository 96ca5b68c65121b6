//! YAML file loading through the overlay resolver

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::prelude::*;
use carpaint_core::path::PathConfig;

pub(crate) async fn read_yaml<T: DeserializeOwned>(
	paths: &PathConfig,
	rel: impl AsRef<Path>,
) -> ClResult<T> {
	let file = paths.resolve(rel).await?;
	let content = tokio::fs::read_to_string(&file).await?;
	serde_yaml::from_str(&content).map_err(|err| {
		warn!("YAML parse error in {}: {}", file.display(), err);
		Error::Parse
	})
}

// vim: ts=4
