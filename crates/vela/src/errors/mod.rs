use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
	InvalidContentType,
	MalformedBody { reason: String },
	MissingParams { field: &'static str },
	InvalidParams { field: &'static str },
	InvalidUserId,
	UserNotFound { id: i64 },
	NoUsersFound,
	Database { message: String },
}

impl core::fmt::Display for Error {
	fn fmt(
		&self,
		fmt: &mut core::fmt::Formatter,
	) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

impl From<DbErr> for Error {
	fn from(err: DbErr) -> Self {
		Self::Database { message: err.to_string() }
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let (status_code, client_error) = self.client_status_and_error();

		if status_code.is_server_error() {
			tracing::error!(error = %self, "request failed");
		} else {
			tracing::debug!(error = %self, client_error = client_error.as_ref(), "request rejected");
		}

		let body = match &self {
			Self::InvalidContentType => json!({
				"error": "Invalid request format",
				"msg": self.message(),
			}),
			_ => json!({ "msg": self.message() }),
		};

		let mut response = (status_code, Json(body)).into_response();
		response.extensions_mut().insert(self);

		response
	}
}

impl Error {
	pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
		match self {
			// -- Validation.
			Self::InvalidContentType => (StatusCode::BAD_REQUEST, ClientError::INVALID_CONTENT_TYPE),
			Self::MalformedBody { .. } => (StatusCode::BAD_REQUEST, ClientError::MALFORMED_BODY),
			Self::MissingParams { .. } => (StatusCode::BAD_REQUEST, ClientError::MISSING_PARAMS),
			Self::InvalidParams { .. } | Self::InvalidUserId => {
				(StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMS)
			}

			// -- Not found.
			Self::UserNotFound { .. } | Self::NoUsersFound => {
				(StatusCode::NOT_FOUND, ClientError::ENTITY_NOT_FOUND)
			}

			// -- Store.
			Self::Database { .. } => (StatusCode::INTERNAL_SERVER_ERROR, ClientError::SERVICE_ERROR),
		}
	}

	/// Text placed in the `msg` field of the response body. Store failures echo
	/// the underlying message verbatim.
	pub fn message(&self) -> String {
		match self {
			Self::InvalidContentType => {
				"The request must be in JSON format (Content-Type: application/json)".to_string()
			}
			Self::MalformedBody { reason } => format!("Request body is not valid JSON: {reason}"),
			Self::MissingParams { field } => format!("Missing required field: {field}"),
			Self::InvalidParams { field } => format!("Invalid value for field: {field}"),
			Self::InvalidUserId => "A valid user id is required".to_string(),
			Self::UserNotFound { id } => format!("User with id {id} not found"),
			Self::NoUsersFound => "No users found".to_string(),
			Self::Database { message } => message.clone(),
		}
	}
}

#[derive(Debug, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
	INVALID_CONTENT_TYPE,
	MALFORMED_BODY,
	MISSING_PARAMS,
	INVALID_PARAMS,
	ENTITY_NOT_FOUND,
	SERVICE_ERROR,
}
