//! HTTP routing

use axum::{
	Router, middleware,
	routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::prelude::*;
use crate::{admin, auth, catalog, company};
use carpaint_core::middleware::require_auth;

fn init_admin(app: &App) -> Router<App> {
	Router::new()
		.route("/api/v1/admin/register", post(admin::user::post_register))
		.route("/api/v1/admin/status", get(admin::user::get_status))
		.route("/api/v1/admin/listusers", get(admin::user::get_list_users))
		.route("/api/v1/admin/manageuser", post(admin::user::post_manage_user))
		.route("/api/v1/admin/updatecompanyinfo", post(admin::company::post_update_company_info))
		.route_layer(middleware::from_fn_with_state(app.clone(), admin::perm::require_admin))
}

fn init_protected(app: &App) -> Router<App> {
	Router::new()
		// Account
		.route("/api/v1/changepassword", post(auth::handler::post_change_password))
		.route("/api/v1/get", get(auth::handler::get_identity))
		// Reference data
		.route("/api/v1/season", get(catalog::handler::get_season))
		.route("/api/v1/basecolors", get(catalog::handler::get_base_colors))
		.route("/api/v1/carmakes", get(catalog::handler::get_car_makes))
		.route("/api/v1/carmodels/{make}", get(catalog::handler::get_car_models))
		// Company
		.route("/api/v1/getcompanyinfo", get(company::handler::get_company_info))
		.route("/api/v1/getlicenses", get(company::handler::get_licenses))
		.route("/api/v1/haveactivelicense", get(company::handler::get_have_active_license))
		.merge(init_admin(app))
		.route_layer(middleware::from_fn_with_state(app.clone(), require_auth))
}

pub fn init(app: App) -> Router {
	let public_router = Router::new().route("/api/v1/login", post(auth::handler::post_login));

	let mut router = Router::new().merge(public_router).merge(init_protected(&app));

	if let Some(dist_dir) = &app.opts.dist_dir {
		router = router.fallback_service(ServeDir::new(dist_dir));
	}

	router.layer(TraceLayer::new_for_http()).with_state(app)
}

// vim: ts=4
