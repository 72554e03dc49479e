use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::error::Error;
use std::fmt;

/// The primary error type for the HTTP layer.
///
/// Every variant renders as a JSON object whose `error` field carries the
/// human-readable message, alongside a machine `code` and the numeric `status`.
#[derive(Debug)]
pub enum AppError {
    /// Unexpected failures. The client only ever sees a generic message and an error id.
    Internal(anyhow::Error),
    /// Missing or malformed request parameters.
    BadRequest(String),
    /// Unknown category or species.
    NotFound(String),
    /// Request body over the configured size limit.
    PayloadTooLarge(String),
}

const INTERNAL_MESSAGE: &str = "An internal server error occurred";

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Internal(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, error_message, error_id) = match self {
            AppError::Internal(e) => {
                let error_id = uuid::Uuid::new_v4();
                tracing::error!(%error_id, "Internal error: {:?}", e);
                ("INTERNAL_ERROR", INTERNAL_MESSAGE.to_string(), Some(error_id))
            }
            AppError::BadRequest(msg) => ("BAD_REQUEST", msg, None),
            AppError::NotFound(msg) => ("NOT_FOUND", msg, None),
            AppError::PayloadTooLarge(msg) => ("PAYLOAD_TOO_LARGE", msg, None),
        };

        let mut body = json!({
            "error": error_message,
            "code": error_code,
            "status": status.as_u16(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        if let Some(id) = error_id {
            body["error_id"] = json!(id.to_string());
        }

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Internal(anyhow::Error::new(rejection).context("failed to read request body"))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err).context("failed to parse request body"))
    }
}

/// A type alias for `Result<T, AppError>`, used throughout the handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Converts an `Option` into a `NotFound` error.
pub trait OptionExt<T> {
    /// `entity` is used verbatim as the start of the message, e.g. `"Species"` -> `"Species not found"`.
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(format!("{} not found", entity)))
    }
}
