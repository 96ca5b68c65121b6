use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use carpaint_core::{Auth, extract::JsonBody, users};

/// Delay applied to failed logins
const LOGIN_FAILURE_DELAY: std::time::Duration = std::time::Duration::from_secs(1);

#[derive(Serialize)]
pub struct MessageRes {
	message: String,
}

/// # POST /api/v1/login
#[derive(Deserialize)]
pub struct LoginReq {
	email: String,
	password: String,
}

#[derive(Serialize)]
pub struct LoginRes {
	token: String,
}

pub async fn post_login(
	State(app): State<App>,
	JsonBody(login): JsonBody<LoginReq>,
) -> ClResult<Json<LoginRes>> {
	if !users::authenticate(&app, &login.email, &login.password).await {
		warn!(email = %login.email, "login failed");
		tokio::time::sleep(LOGIN_FAILURE_DELAY).await;
		return Err(Error::Unauthorized);
	}

	let token = app.auth_adapter.create_access_token(&login.email).await?;
	info!(email = %login.email, "login");
	Ok(Json(LoginRes { token: token.into() }))
}

/// # POST /api/v1/changepassword
#[derive(Deserialize)]
pub struct ChangePasswordReq {
	current_password: String,
	new_password: String,
}

pub async fn post_change_password(
	State(app): State<App>,
	Auth(auth): Auth,
	JsonBody(req): JsonBody<ChangePasswordReq>,
) -> ClResult<Json<MessageRes>> {
	users::change_password(&app, &auth.email, &req.current_password, &req.new_password).await?;
	Ok(Json(MessageRes { message: "Password changed successfully".into() }))
}

/// # GET /api/v1/get
#[derive(Serialize)]
pub struct IdentityRes {
	message: &'static str,
	email: String,
}

pub async fn get_identity(Auth(auth): Auth) -> Json<IdentityRes> {
	Json(IdentityRes { message: "Authenticated access granted", email: auth.email.into() })
}

// vim: ts=4
