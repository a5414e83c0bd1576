use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

pub async fn login<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload?;

    let command = LoginCommand::new(
        body.email.unwrap_or_default(),
        body.password.unwrap_or_default(),
    )
    .map_err(|e| login_error(e.into()))?;

    state
        .auth_service
        .login(command)
        .await
        .map_err(login_error)
        .map(|issued| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    token: issued.access_token,
                },
            )
        })
}

/// HTTP request body for login (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}

fn login_error(err: AuthError) -> ApiError {
    match err {
        AuthError::AuthenticationFailure => {
            tracing::warn!("Login rejected: invalid credentials");
            ApiError::Unauthorized("Invalid credentials".to_string())
        }
        AuthError::Validation(e) => {
            tracing::warn!(error = %e, "Rejected login request");
            ApiError::BadRequest(e.to_string())
        }
        _ => {
            tracing::error!(error = %err, "Login failed");
            ApiError::InternalServerError("Login failed".to_string())
        }
    }
}
