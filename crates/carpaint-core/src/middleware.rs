//! Auth gate middleware

use axum::{
	extract::{Request, State},
	http::header,
	middleware::Next,
	response::Response,
};

use crate::extract::Auth;
use crate::prelude::*;

/// Token from the `Authorization` header. The raw token is the documented
/// form; a `Bearer ` prefix is accepted as well.
fn header_token(req: &Request) -> Option<Box<str>> {
	let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?.trim();
	let token = value.strip_prefix("Bearer ").map_or(value, str::trim);
	if token.is_empty() { None } else { Some(token.into()) }
}

/// Rejects requests without a valid token for an existing user, and attaches
/// the user to the request as `Auth`.
pub async fn require_auth(
	State(app): State<App>,
	mut req: Request,
	next: Next,
) -> ClResult<Response> {
	let Some(token) = header_token(&req) else {
		debug!("missing authorization header");
		return Err(Error::Unauthorized);
	};

	let claims = app.auth_adapter.validate_access_token(&token).await?;

	let user = match app.auth_adapter.read_user(&claims.email).await {
		Ok(user) => user,
		Err(Error::NotFound) => {
			warn!(email = %claims.email, "token for unknown user");
			return Err(Error::Unauthorized);
		}
		Err(err) => return Err(err),
	};

	req.extensions_mut().insert(Auth(user));

	Ok(next.run(req).await)
}


// vim: ts=4
