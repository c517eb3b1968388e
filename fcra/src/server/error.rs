// fcra/src/server/error.rs

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use fcra_core::FcraError;
use fcra_core::domain::DomainError;

/// Maps failures to `{"error": message}`: caller mistakes are 400,
/// everything else is 500.
#[derive(Debug)]
pub enum ApiError {
    Core(FcraError),
    /// Request body that could not be read as the expected JSON.
    Body(String),
}

impl From<FcraError> for ApiError {
    fn from(err: FcraError) -> Self {
        Self::Core(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Core(FcraError::Domain(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Core(err) if !err.is_client_error() => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Core(err) => err.to_string(),
            Self::Body(text) => text.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!(error = %message, "Request failed");
        } else {
            warn!(error = %message, "Rejected request");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
