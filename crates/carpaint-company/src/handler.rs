//! User-facing company and license endpoints

use axum::{Json, extract::State};
use std::collections::BTreeMap;

use crate::prelude::*;
use crate::store;
use crate::types::{CompanyInfo, License};
use carpaint_core::Auth;

/// # GET /api/v1/getcompanyinfo
pub async fn get_company_info(
	State(app): State<App>,
	Auth(auth): Auth,
) -> ClResult<Json<CompanyInfo>> {
	let user_dir = app.user_dir(&auth.email)?;
	Ok(Json(store::read_company_info(&user_dir).await?))
}

/// # GET /api/v1/getlicenses
pub async fn get_licenses(
	State(app): State<App>,
	Auth(auth): Auth,
) -> ClResult<Json<BTreeMap<String, License>>> {
	let user_dir = app.user_dir(&auth.email)?;
	Ok(Json(store::list_licenses(&user_dir).await?))
}

/// # GET /api/v1/haveactivelicense
pub async fn get_have_active_license(
	State(app): State<App>,
	Auth(auth): Auth,
) -> ClResult<Json<bool>> {
	let user_dir = app.user_dir(&auth.email)?;
	Ok(Json(store::has_active_license(&user_dir, chrono::Utc::now()).await?))
}

// vim: ts=4
