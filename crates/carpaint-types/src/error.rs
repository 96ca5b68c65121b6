//! Error type shared by every crate of the backend, with its HTTP mapping.

use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::prelude::*;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	// Client side
	ValidationError(String),
	Unauthorized,
	PermissionDenied,
	NotFound,
	Conflict(String),

	// Server side
	Parse,
	DbError,
	ConfigError(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		warn!("JSON error: {}", err);
		Self::Parse
	}
}

impl From<chrono::ParseError> for Error {
	fn from(err: chrono::ParseError) -> Self {
		warn!("date parse error: {}", err);
		Self::Parse
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Unauthorized => write!(f, "unauthorized"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::NotFound => write!(f, "not found"),
			Error::Conflict(msg) => write!(f, "conflict: {}", msg),
			Error::Parse => write!(f, "parse error"),
			Error::DbError => write!(f, "database error"),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

#[derive(Serialize)]
struct ErrorBody<'a> {
	error: &'a str,
	message: String,
}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::Conflict(_) => StatusCode::CONFLICT,
			Error::Parse
			| Error::DbError
			| Error::ConfigError(_)
			| Error::Internal(_)
			| Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn code(&self) -> &'static str {
		match self {
			Error::ValidationError(_) => "E-VALIDATION",
			Error::Unauthorized => "E-UNAUTHORIZED",
			Error::PermissionDenied => "E-FORBIDDEN",
			Error::NotFound => "E-NOTFOUND",
			Error::Conflict(_) => "E-CONFLICT",
			_ => "E-INTERNAL",
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status();
		let message = match &self {
			Error::ValidationError(msg) | Error::Conflict(msg) => msg.clone(),
			Error::Unauthorized => "Unauthorized".to_string(),
			Error::PermissionDenied => "Forbidden: Admin access required".to_string(),
			Error::NotFound => "Not found".to_string(),
			_ => {
				error!("{}", self);
				"Internal server error".to_string()
			}
		};

		(status, Json(ErrorBody { error: self.code(), message })).into_response()
	}
}


// vim: ts=4
