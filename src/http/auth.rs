//! Registration endpoint: `POST /api/auth/register`.

use crate::application::auth::{RegistrationRequest, RegistrationService};
use crate::domain::RegistrationError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegistrationRequest>,
) -> Result<impl IntoResponse, RegistrationError> {
    let service = RegistrationService::new(state.db.user_repo());
    let user = service.register(payload)?;
    log::debug!("registered user {}", user.email);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully", "user": user })),
    ))
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingFields | Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
            Self::OperationFailed(source) => {
                log::error!("registration failed: {source:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server Error", "error": source.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
