//! Seasons from `global/seasons.yaml`.
//!
//! Each season spans `[date_from, date_to)` given as `DD.MM`. A range whose
//! start is later in the year than its end wraps across new year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::BTreeMap};

use crate::prelude::*;
use crate::yaml::read_yaml;
use carpaint_core::path::PathConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeasonConfig {
	pub date_from: String,
	pub date_to: String,
	#[serde(default)]
	pub est_fuel_cons_for_paint_dry: f64,
	#[serde(default)]
	pub est_fuel_cons_for_base_dry: f64,
}

/// `DD.MM` → (month, day). Validated against a leap year so `29.02` is accepted.
fn parse_day_month(s: &str) -> ClResult<(u32, u32)> {
	let date = NaiveDate::parse_from_str(&format!("{}.2000", s.trim()), "%d.%m.%Y")?;
	Ok((date.month(), date.day()))
}

impl SeasonConfig {
	pub fn contains(&self, date: NaiveDate) -> ClResult<bool> {
		let from = parse_day_month(&self.date_from)?;
		let to = parse_day_month(&self.date_to)?;
		let day = (date.month(), date.day());

		Ok(match from.cmp(&to) {
			Ordering::Less => from <= day && day < to,
			Ordering::Greater => day >= from || day < to,
			// Same start and end: the whole year
			Ordering::Equal => true,
		})
	}
}

pub type Seasons = BTreeMap<String, SeasonConfig>;

pub async fn read_seasons(paths: &PathConfig) -> ClResult<Seasons> {
	read_yaml(paths, "global/seasons.yaml").await
}

pub fn determine_season(seasons: &Seasons, date: NaiveDate) -> ClResult<(&str, &SeasonConfig)> {
	for (name, season) in seasons {
		if season.contains(date)? {
			return Ok((name, season));
		}
	}
	Err(Error::Internal(format!("could not determine season for {}", date)))
}

pub async fn current_season(paths: &PathConfig, date: NaiveDate) -> ClResult<(String, SeasonConfig)> {
	let seasons = read_seasons(paths).await?;
	let (name, season) = determine_season(&seasons, date)?;
	Ok((name.to_string(), season.clone()))
}


// vim: ts=4
