//! Company info and license updates on behalf of a user

use axum::{Json, extract::State};

use crate::prelude::*;
use crate::user::MessageRes;
use carpaint_company::{store, types::CompanyInfo};
use carpaint_core::{Auth, extract::JsonBody};

/// # POST /api/v1/admin/updatecompanyinfo
pub async fn post_update_company_info(
	State(app): State<App>,
	Auth(admin): Auth,
	JsonBody(info): JsonBody<CompanyInfo>,
) -> ClResult<Json<MessageRes>> {
	if info.email.is_empty() {
		return Err(Error::ValidationError("email is required".into()));
	}
	// Target must be a registered user
	app.auth_adapter.read_user(&info.email).await?;

	let user_dir = app.user_dir(&info.email)?;
	let license = store::update_company_info(&user_dir, &info, chrono::Local::now()).await?;

	info!(
		admin = %admin.email,
		email = %info.email,
		license = ?license,
		"company info updated"
	);
	Ok(Json(MessageRes::new("Company info update processed successfully")))
}

// vim: ts=4
