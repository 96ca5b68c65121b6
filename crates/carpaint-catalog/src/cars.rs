//! Car catalog: one `cars/<make>.yaml` file per brand

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::prelude::*;
use crate::yaml::read_yaml;
use carpaint_core::path::PathConfig;

const CARS_DIR: &str = "cars";
const CARS_SUFFIX: &str = ".yaml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CarModel {
	#[serde(default)]
	pub body: Vec<String>,
	#[serde(default)]
	pub class: String,
	#[serde(default)]
	pub r#gen: Vec<String>,
	#[serde(default)]
	pub is_suv: bool,
}

/// Model name → model data
pub type CarModels = BTreeMap<String, CarModel>;

fn check_make(make: &str) -> ClResult<()> {
	if make.is_empty() || make == "." || make == ".." || make.contains(['/', '\\']) {
		return Err(Error::ValidationError(format!("invalid car make: {:?}", make)));
	}
	Ok(())
}

pub async fn read_car_models(paths: &PathConfig, make: &str) -> ClResult<CarModels> {
	check_make(make)?;
	read_yaml(paths, format!("{}/{}{}", CARS_DIR, make, CARS_SUFFIX)).await
}

pub async fn list_car_brands(paths: &PathConfig) -> ClResult<Vec<String>> {
	paths.list_distinct_with_suffix(CARS_DIR, CARS_SUFFIX).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::Path;
	use tempfile::TempDir;

	const AUDI: &str = "
A5:
  body: [sedan, coupe]
  class: D
  gen: [B8, B9]
  is_suv: false
Q7:
  body: [suv]
  class: F
  gen: [4M]
  is_suv: true
";

	fn write(root: &Path, rel: &str, content: &str) {
		let path = root.join(rel);
		std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
		std::fs::write(path, content).expect("write");
	}

	#[tokio::test]
	async fn test_read_car_models() {
		let origin = TempDir::new().expect("tmp");
		write(origin.path(), "cars/audi.yaml", AUDI);

		let models =
			read_car_models(&PathConfig::new(origin.path()), "audi").await.expect("read failed");
		assert_eq!(models.len(), 2);
		assert!(!models["A5"].is_suv);
		assert!(models["Q7"].is_suv);
		assert_eq!(models["A5"].body, vec!["sedan", "coupe"]);
		assert_eq!(models["Q7"].class, "F");
	}

	#[tokio::test]
	async fn test_override_file_replaces_origin_file() {
		let origin = TempDir::new().expect("tmp");
		let over = TempDir::new().expect("tmp");
		write(origin.path(), "cars/audi.yaml", AUDI);
		write(over.path(), "cars/audi.yaml", "A5:\n  class: X\n");

		let paths = PathConfig::new(origin.path()).with_override(over.path());
		let models = read_car_models(&paths, "audi").await.expect("read failed");
		assert_eq!(models.len(), 1);
		assert_eq!(models["A5"].class, "X");
	}

	#[tokio::test]
	async fn test_unknown_or_invalid_make() {
		let origin = TempDir::new().expect("tmp");
		let paths = PathConfig::new(origin.path());
		assert!(matches!(read_car_models(&paths, "tesla").await, Err(Error::NotFound)));
		assert!(matches!(read_car_models(&paths, "..").await, Err(Error::ValidationError(_))));
		assert!(matches!(read_car_models(&paths, "a/b").await, Err(Error::ValidationError(_))));
	}

	#[tokio::test]
	async fn test_malformed_yaml_is_parse_error() {
		let origin = TempDir::new().expect("tmp");
		write(origin.path(), "cars/bad.yaml", "A5: [unclosed");
		let res = read_car_models(&PathConfig::new(origin.path()), "bad").await;
		assert!(matches!(res, Err(Error::Parse)));
	}

	#[tokio::test]
	async fn test_list_car_brands() {
		let origin = TempDir::new().expect("tmp");
		let over = TempDir::new().expect("tmp");
		for brand in ["audi", "seat", "skoda", "vw"] {
			write(origin.path(), &format!("cars/{}.yaml", brand), "{}");
		}
		write(over.path(), "cars/audi.yaml", "{}");
		write(over.path(), "cars/seat.yaml", "{}");

		let paths = PathConfig::new(origin.path()).with_override(over.path());
		let brands = list_car_brands(&paths).await.expect("list failed");
		assert_eq!(brands, vec!["audi", "seat", "skoda", "vw"]);
	}
}

// vim: ts=4
