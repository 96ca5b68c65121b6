//! Base paint colors from `global/colors.yaml`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::prelude::*;
use crate::yaml::read_yaml;
use carpaint_core::path::PathConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Color {
	#[serde(default)]
	pub hex: String,
	#[serde(default)]
	pub rarity: String,
}

pub async fn read_base_colors(paths: &PathConfig) -> ClResult<BTreeMap<String, Color>> {
	read_yaml(paths, "global/colors.yaml").await
}


// vim: ts=4
