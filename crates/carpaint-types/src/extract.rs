//! Request body extractor with uniform error reporting.

use axum::{
	Json,
	extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::Error;

// JsonBody //
//**********//
/// JSON body extractor. Malformed or incomplete payloads become `Error::ValidationError`
/// so clients always receive the JSON error body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		match Json::<T>::from_request(req, state).await {
			Ok(Json(value)) => Ok(JsonBody(value)),
			Err(rejection) => Err(Error::ValidationError(rejection.body_text())),
		}
	}
}

// vim: ts=4
