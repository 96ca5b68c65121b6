//! User management

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use carpaint_core::{Auth, extract::JsonBody, users};
use carpaint_types::auth_adapter::UserListItem;

#[derive(Serialize)]
pub struct MessageRes {
	message: String,
}

impl MessageRes {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}

/// # POST /api/v1/admin/register
#[derive(Deserialize)]
pub struct RegisterReq {
	email: String,
	password: String,
}

pub async fn post_register(
	State(app): State<App>,
	Auth(admin): Auth,
	JsonBody(req): JsonBody<RegisterReq>,
) -> ClResult<(StatusCode, Json<MessageRes>)> {
	users::register_user(&app, &req.email, &req.password).await?;
	info!(admin = %admin.email, email = %req.email, "user created by admin");
	Ok((StatusCode::CREATED, Json(MessageRes::new("User created successfully"))))
}

/// # GET /api/v1/admin/status
#[derive(Serialize)]
pub struct StatusRes {
	status: &'static str,
	message: &'static str,
	data: StatusData,
}

#[derive(Serialize)]
pub struct StatusData {
	email: String,
	version: &'static str,
}

pub async fn get_status(Auth(admin): Auth) -> Json<StatusRes> {
	Json(StatusRes {
		status: "success",
		message: "Admin access granted",
		data: StatusData { email: admin.email.into(), version: carpaint_core::app::VERSION },
	})
}

/// # GET /api/v1/admin/listusers
pub async fn get_list_users(State(app): State<App>) -> ClResult<Json<Vec<UserListItem>>> {
	Ok(Json(app.auth_adapter.list_users().await?))
}

/// # POST /api/v1/admin/manageuser
#[derive(Deserialize)]
pub struct ManageUserReq {
	action: String,
	email: String,
	#[serde(default)]
	data: Option<serde_json::Value>,
}

pub async fn post_manage_user(
	State(app): State<App>,
	Auth(admin): Auth,
	JsonBody(req): JsonBody<ManageUserReq>,
) -> ClResult<Json<MessageRes>> {
	if req.email.is_empty() {
		return Err(Error::ValidationError("email is required".into()));
	}

	match req.action.as_str() {
		"delete" => {
			app.auth_adapter.delete_user(&req.email).await?;
			info!(admin = %admin.email, email = %req.email, "user deleted");
			Ok(Json(MessageRes::new(format!("User {} deleted successfully", req.email))))
		}
		"change_pass" => {
			let Some(serde_json::Value::String(password)) = req.data else {
				return Err(Error::ValidationError("invalid password format".into()));
			};
			users::set_password(&app, &req.email, &password).await?;
			Ok(Json(MessageRes::new(format!(
				"Password changed successfully for user {}",
				req.email
			))))
		}
		action => Err(Error::ValidationError(format!("unknown action: {}", action))),
	}
}

// vim: ts=4
