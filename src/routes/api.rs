use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use kairos_contact::{ContactSubmission, Error};
use serde_json::json;

use crate::{error::ApiError, routes::AppState};

/// POST /api/contact
///
/// Configuration is checked before the body is read, so a misconfigured
/// deployment answers 500 whatever the payload. At most one Forms API request
/// is made per call.
pub async fn contact(
    State(app): State<AppState>,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let target = app.contact.target()?;

    let Json(submission) = body.map_err(|rejection| {
        tracing::debug!(err = %rejection, "contact body rejected");
        Error::Malformed
    })?;

    app.contact.forward(&target, &submission).await?;

    Ok(Json(json!({"success": true})))
}
