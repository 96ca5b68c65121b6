//! Admin permission middleware

use axum::{
	extract::{Request, State},
	middleware::Next,
	response::Response,
};

use carpaint_core::extract::Auth;

use crate::prelude::*;

/// Middleware that lets only registered admins through.
///
/// Must run after `require_auth`, which provides the `Auth` extension.
pub async fn require_admin(
	State(app): State<App>,
	Auth(auth): Auth,
	req: Request,
	next: Next,
) -> Result<Response, Error> {
	if !app.admins.is_admin(&auth.email) {
		warn!(subject = %auth.email, "Admin permission denied");
		return Err(Error::PermissionDenied);
	}

	Ok(next.run(req).await)
}

// vim: ts=4
