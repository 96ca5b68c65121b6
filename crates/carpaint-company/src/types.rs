use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::prelude::*;

/// License details as submitted with company info
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LicenseInfo {
	#[serde(default)]
	pub is_active: bool,
	/// RFC 3339 instant or `YYYY-MM-DD`
	#[serde(default)]
	pub ends_date: String,
	#[serde(default)]
	pub licensed_to: String,
	#[serde(default)]
	pub level: String,
}

impl LicenseInfo {
	pub fn is_empty(&self) -> bool {
		!self.is_active
			&& self.ends_date.is_empty()
			&& self.licensed_to.is_empty()
			&& self.level.is_empty()
	}
}

#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompanyInfo {
	pub email: String,
	#[serde(default)]
	pub company_name: String,
	#[serde(default)]
	pub current_time: String,
	pub license: Option<LicenseInfo>,
}

/// A stored license record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct License {
	pub licensed_to: String,
	pub level: String,
	pub is_active: bool,
	pub issued: DateTime<Utc>,
	pub expire: DateTime<Utc>,
}

impl License {
	pub fn from_info(info: &LicenseInfo, issued: DateTime<Utc>) -> ClResult<Self> {
		Ok(License {
			licensed_to: info.licensed_to.clone(),
			level: info.level.clone(),
			is_active: info.is_active,
			issued,
			expire: parse_ends_date(&info.ends_date)?,
		})
	}

	pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
		self.is_active && self.expire > now
	}
}

fn parse_ends_date(s: &str) -> ClResult<DateTime<Utc>> {
	let s = s.trim();
	if s.is_empty() {
		return Err(Error::ValidationError("license ends_date is required".into()));
	}
	if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
		return Ok(dt.with_timezone(&Utc));
	}
	if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
		return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
	}
	Err(Error::ValidationError(format!("invalid license ends_date: {:?}", s)))
}


// vim: ts=4
