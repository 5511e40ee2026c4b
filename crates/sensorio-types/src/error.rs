//! Domain error taxonomy and its mapping to HTTP responses.
//!
//! Internal layers raise the specific variant; the `IntoResponse` impl is
//! the only place errors are translated to status codes. Store and
//! serialization failures are surfaced generically and never leak internals.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type SnResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	UserNotFound,
	ProjectNotFound,
	ModuleNotFound,
	DeviceNotFound,
	/// Duplicate username or email on registration
	Conflict,
	/// Update payload with zero present fields
	BadUpdateData,
	ValidationError(String),
	/// Missing or invalid credentials
	Unauthenticated,
	/// Principal is known but not allowed. Surfaced to callers as 404, never
	/// 403: entity existence is not revealed to foreign principals.
	PermissionDenied,
	DbError,
	Parse,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::UserNotFound => write!(f, "user not found"),
			Error::ProjectNotFound => write!(f, "project not found"),
			Error::ModuleNotFound => write!(f, "module not found"),
			Error::DeviceNotFound => write!(f, "device not found"),
			Error::Conflict => write!(f, "username or email already in use"),
			Error::BadUpdateData => write!(f, "update contains no fields"),
			Error::ValidationError(msg) => write!(f, "{}", msg),
			Error::Unauthenticated => write!(f, "authentication required"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::DbError => write!(f, "database error"),
			Error::Parse => write!(f, "parse error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			Error::UserNotFound
			| Error::ProjectNotFound
			| Error::ModuleNotFound
			| Error::DeviceNotFound
			| Error::PermissionDenied => StatusCode::NOT_FOUND,
			Error::Conflict => StatusCode::CONFLICT,
			Error::BadUpdateData | Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::Unauthenticated => StatusCode::UNAUTHORIZED,
			Error::DbError | Error::Parse | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	fn public_message(&self) -> String {
		match self {
			// 404 also covers PermissionDenied, with the same opaque message
			Error::PermissionDenied => "not found".into(),
			Error::DbError | Error::Parse | Error::Internal(_) | Error::Io(_) => {
				"internal server error".into()
			}
			other => other.to_string(),
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = self.status();
		if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::error!("request failed: {:?}", self);
		}
		let body = Json(json!({ "error": self.public_message() }));
		(status, body).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_mapping() {
		assert_eq!(Error::ProjectNotFound.status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::ModuleNotFound.status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::Conflict.status(), StatusCode::CONFLICT);
		assert_eq!(Error::BadUpdateData.status(), StatusCode::BAD_REQUEST);
		assert_eq!(Error::ValidationError("x".into()).status(), StatusCode::BAD_REQUEST);
		assert_eq!(Error::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
		assert_eq!(Error::DbError.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_permission_denied_is_opaque() {
		// Anti-enumeration: foreign-owned must be indistinguishable from missing
		assert_eq!(Error::PermissionDenied.status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::PermissionDenied.public_message(), "not found");
	}

	#[test]
	fn test_internal_errors_never_leak() {
		let err = Error::Internal("sqlite file locked at /var/db".into());
		assert_eq!(err.public_message(), "internal server error");
	}
}

// vim: ts=4
