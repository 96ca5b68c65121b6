//! File store for company info and licenses inside a user's directory

use chrono::{DateTime, Local, Utc};
use std::{collections::BTreeMap, path::Path};
use tokio::io::AsyncWriteExt;

use crate::prelude::*;
use crate::types::{CompanyInfo, License};
use carpaint_core::userdata::{INFO_DIR, LICENSES_DIR, LOGS_DIR};

pub const COMPANY_FILE: &str = "company.json";
pub const INFO_LOG_FILE: &str = "infoupdate.log";

pub async fn read_company_info(user_dir: &Path) -> ClResult<CompanyInfo> {
	let path = user_dir.join(INFO_DIR).join(COMPANY_FILE);
	let content = match tokio::fs::read_to_string(&path).await {
		Ok(content) => content,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Err(Error::NotFound),
		Err(err) => return Err(err.into()),
	};
	Ok(serde_json::from_str(&content)?)
}

pub async fn write_company_info(user_dir: &Path, info: &CompanyInfo) -> ClResult<()> {
	let dir = user_dir.join(INFO_DIR);
	tokio::fs::create_dir_all(&dir).await?;
	let json = serde_json::to_string_pretty(info)?;
	tokio::fs::write(dir.join(COMPANY_FILE), json).await?;
	Ok(())
}

pub async fn append_info_log(user_dir: &Path, company_name: &str, now: DateTime<Local>) -> ClResult<()> {
	let dir = user_dir.join(LOGS_DIR);
	tokio::fs::create_dir_all(&dir).await?;
	let entry = format!(
		"[{}] Updated company info for: {}\n",
		now.format("%Y-%m-%d %H:%M:%S"),
		company_name
	);

	let mut file = tokio::fs::OpenOptions::new()
		.create(true)
		.append(true)
		.open(dir.join(INFO_LOG_FILE))
		.await?;
	file.write_all(entry.as_bytes()).await?;
	file.flush().await?;
	Ok(())
}

/// Writes `licenses/<YYYYMMDDHHMMSS>.json` and returns the file stem.
/// A license written within the same second replaces the previous one.
pub async fn write_license(user_dir: &Path, license: &License, now: DateTime<Local>) -> ClResult<String> {
	let dir = user_dir.join(LICENSES_DIR);
	tokio::fs::create_dir_all(&dir).await?;
	let stem = now.format("%Y%m%d%H%M%S").to_string();
	let json = serde_json::to_string_pretty(license)?;
	tokio::fs::write(dir.join(format!("{}.json", stem)), json).await?;
	Ok(stem)
}

/// All licenses keyed by file stem. Unreadable files are skipped with a warning.
pub async fn list_licenses(user_dir: &Path) -> ClResult<BTreeMap<String, License>> {
	let mut licenses = BTreeMap::new();
	let mut entries = match tokio::fs::read_dir(user_dir.join(LICENSES_DIR)).await {
		Ok(entries) => entries,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(licenses),
		Err(err) => return Err(err.into()),
	};

	while let Some(entry) = entries.next_entry().await? {
		if !entry.file_type().await?.is_file() {
			continue;
		}
		let file_name = entry.file_name();
		let Some(stem) = file_name.to_str().and_then(|name| name.strip_suffix(".json")) else {
			continue;
		};

		let content = tokio::fs::read_to_string(entry.path()).await?;
		match serde_json::from_str::<License>(&content) {
			Ok(license) => {
				licenses.insert(stem.to_string(), license);
			}
			Err(err) => warn!("skipping license file {}: {}", entry.path().display(), err),
		}
	}

	Ok(licenses)
}

pub async fn has_active_license(user_dir: &Path, now: DateTime<Utc>) -> ClResult<bool> {
	let licenses = list_licenses(user_dir).await?;
	Ok(licenses.values().any(|license| license.is_valid_at(now)))
}

/// Stores company info, logs the update and, when a non-empty license is
/// attached, issues a license file. Returns the stem of the license file.
///
/// The license is validated before anything is written. Failures after
/// `company.json` is written are `Error::Internal` and leave it in place.
pub async fn update_company_info(
	user_dir: &Path,
	info: &CompanyInfo,
	now: DateTime<Local>,
) -> ClResult<Option<String>> {
	let license = match &info.license {
		Some(license_info) if !license_info.is_empty() => {
			Some(License::from_info(license_info, now.with_timezone(&Utc))?)
		}
		_ => None,
	};

	write_company_info(user_dir, info).await?;

	let partial = |step: &str, err: Error| {
		error!("company info for {} stored, but {} failed: {}", info.email, step, err);
		Error::Internal(format!("{} failed after company info was stored", step))
	};

	append_info_log(user_dir, &info.company_name, now)
		.await
		.map_err(|err| partial("info log update", err))?;

	match license {
		Some(license) => write_license(user_dir, &license, now)
			.await
			.map(Some)
			.map_err(|err| partial("license write", err)),
		None => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::LicenseInfo;
	use chrono::TimeZone;
	use tempfile::TempDir;

	fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
		Local.with_ymd_and_hms(y, mo, d, h, mi, s).single().expect("valid local time")
	}

	fn company(license: Option<LicenseInfo>) -> CompanyInfo {
		CompanyInfo {
			email: "a@x.com".into(),
			company_name: "ACME Paint".into(),
			current_time: "2024-05-01T10:00:00Z".into(),
			license,
		}
	}

	fn active_license(ends_date: &str) -> LicenseInfo {
		LicenseInfo {
			is_active: true,
			ends_date: ends_date.into(),
			licensed_to: "ACME Paint".into(),
			level: "pro".into(),
		}
	}

	#[tokio::test]
	async fn test_missing_company_info_is_not_found() {
		let tmp = TempDir::new().expect("tmp");
		assert!(matches!(read_company_info(tmp.path()).await, Err(Error::NotFound)));
	}

	#[tokio::test]
	async fn test_update_without_license() {
		let tmp = TempDir::new().expect("tmp");
		let now = local(2024, 5, 1, 10, 20, 30);

		let stem = update_company_info(tmp.path(), &company(None), now).await.expect("update");
		assert!(stem.is_none());

		let stored = read_company_info(tmp.path()).await.expect("read");
		assert_eq!(stored.company_name, "ACME Paint");

		let raw = std::fs::read_to_string(tmp.path().join("info/company.json")).expect("read");
		assert!(raw.contains("\n  \"email\""), "company.json is pretty printed");

		let log = std::fs::read_to_string(tmp.path().join("logs/infoupdate.log")).expect("log");
		assert_eq!(log, "[2024-05-01 10:20:30] Updated company info for: ACME Paint\n");
		assert!(list_licenses(tmp.path()).await.expect("list").is_empty());
	}

	#[tokio::test]
	async fn test_empty_license_is_ignored() {
		let tmp = TempDir::new().expect("tmp");
		let info = company(Some(LicenseInfo::default()));
		let stem = update_company_info(tmp.path(), &info, Local::now()).await.expect("update");
		assert!(stem.is_none());
	}

	#[tokio::test]
	async fn test_update_with_license_and_log_appends() {
		let tmp = TempDir::new().expect("tmp");
		let info = company(Some(active_license("2099-12-31")));

		let stem = update_company_info(tmp.path(), &info, local(2024, 5, 1, 10, 20, 30))
			.await
			.expect("update");
		assert_eq!(stem.as_deref(), Some("20240501102030"));
		update_company_info(tmp.path(), &info, local(2024, 5, 2, 8, 0, 0)).await.expect("update");

		let licenses = list_licenses(tmp.path()).await.expect("list");
		assert_eq!(licenses.len(), 2);
		assert_eq!(licenses["20240501102030"].level, "pro");

		let log = std::fs::read_to_string(tmp.path().join("logs/infoupdate.log")).expect("log");
		assert_eq!(log.lines().count(), 2);

		assert!(has_active_license(tmp.path(), Utc::now()).await.expect("check"));
	}

	#[tokio::test]
	async fn test_invalid_license_writes_nothing() {
		let tmp = TempDir::new().expect("tmp");
		let info = company(Some(active_license("someday")));
		let res = update_company_info(tmp.path(), &info, Local::now()).await;
		assert!(matches!(res, Err(Error::ValidationError(_))));
		assert!(!tmp.path().join("info/company.json").exists());
	}

	#[tokio::test]
	async fn test_failure_after_company_file_keeps_it() {
		let tmp = TempDir::new().expect("tmp");
		// A regular file where the log directory should be
		std::fs::write(tmp.path().join("logs"), "").expect("write");

		let info = company(Some(active_license("2099-12-31")));
		let res = update_company_info(tmp.path(), &info, local(2024, 5, 1, 10, 20, 30)).await;
		let err = res.expect_err("log write must fail");
		assert!(matches!(err, Error::Internal(_)));
		assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);

		let stored = read_company_info(tmp.path()).await.expect("company.json kept");
		assert_eq!(stored.company_name, "ACME Paint");
		assert_eq!(stored.email, "a@x.com");
		assert!(list_licenses(tmp.path()).await.expect("list").is_empty());
	}

	#[tokio::test]
	async fn test_active_license_check() {
		let tmp = TempDir::new().expect("tmp");
		assert!(!has_active_license(tmp.path(), Utc::now()).await.expect("check"));

		let expired = company(Some(active_license("2001-01-01")));
		update_company_info(tmp.path(), &expired, local(2000, 1, 1, 0, 0, 0)).await.expect("update");
		assert!(!has_active_license(tmp.path(), Utc::now()).await.expect("check"));

		let inactive =
			company(Some(LicenseInfo { is_active: false, ..active_license("2099-01-01") }));
		update_company_info(tmp.path(), &inactive, local(2000, 1, 2, 0, 0, 0)).await.expect("update");
		assert!(!has_active_license(tmp.path(), Utc::now()).await.expect("check"));

		let valid = company(Some(active_license("2099-01-01")));
		update_company_info(tmp.path(), &valid, local(2000, 1, 3, 0, 0, 0)).await.expect("update");
		assert!(has_active_license(tmp.path(), Utc::now()).await.expect("check"));
	}

	#[tokio::test]
	async fn test_list_licenses_skips_foreign_files() {
		let tmp = TempDir::new().expect("tmp");
		let dir = tmp.path().join("licenses");
		std::fs::create_dir_all(&dir).expect("mkdir");
		std::fs::write(dir.join("notes.txt"), "hello").expect("write");
		std::fs::write(dir.join("broken.json"), "{").expect("write");

		assert!(list_licenses(tmp.path()).await.expect("list").is_empty());
	}
}

// vim: ts=4
