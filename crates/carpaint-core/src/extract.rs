//! Custom extractors

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;
use carpaint_types::auth_adapter::UserCtx;

pub use carpaint_types::extract::JsonBody;

// Auth //
//******//
/// The authenticated user, inserted into request extensions by `require_auth`
#[derive(Debug, Clone)]
pub struct Auth(pub UserCtx);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// vim: ts=4
