use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// JSON error for the contact endpoint: `{"error": "<message>"}`.
///
/// Only the public message of the underlying error is sent; details stay in
/// the logs.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] kairos_contact::Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        use kairos_contact::Error;

        if self.0.is_client_error() {
            return StatusCode::BAD_REQUEST;
        }

        match &self.0 {
            Error::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::debug!(status = status.as_u16(), err = %self.0, "contact api error");
        }

        (status, Json(json!({ "error": self.0.public_message() }))).into_response()
    }
}
