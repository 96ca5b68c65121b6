//! Reference data endpoints. All data is resolved with the caller's override directory on top.

use axum::{
	Json,
	extract::{Path, State},
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::prelude::*;
use crate::{cars, colors, seasons};
use carpaint_core::Auth;

/// # GET /api/v1/carmakes
pub async fn get_car_makes(
	State(app): State<App>,
	Auth(auth): Auth,
) -> ClResult<Json<Vec<String>>> {
	let paths = app.user_paths(&auth.email)?;
	Ok(Json(cars::list_car_brands(&paths).await?))
}

/// # GET /api/v1/carmodels/{make}
pub async fn get_car_models(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(make): Path<String>,
) -> ClResult<Json<cars::CarModels>> {
	let paths = app.user_paths(&auth.email)?;
	Ok(Json(cars::read_car_models(&paths, &make).await?))
}

/// # GET /api/v1/basecolors
pub async fn get_base_colors(
	State(app): State<App>,
	Auth(auth): Auth,
) -> ClResult<Json<BTreeMap<String, colors::Color>>> {
	let paths = app.user_paths(&auth.email)?;
	Ok(Json(colors::read_base_colors(&paths).await?))
}

#[derive(Serialize)]
pub struct SeasonRes {
	season: String,
	details: seasons::SeasonConfig,
}

/// # GET /api/v1/season
pub async fn get_season(State(app): State<App>, Auth(auth): Auth) -> ClResult<Json<SeasonRes>> {
	let paths = app.user_paths(&auth.email)?;
	let today = chrono::Local::now().date_naive();
	let (season, details) = seasons::current_season(&paths, today).await?;
	Ok(Json(SeasonRes { season, details }))
}

// vim: ts=4
