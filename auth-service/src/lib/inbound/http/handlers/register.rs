use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;
use crate::user::errors::ValidationError;

pub async fn register<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let Json(body) = payload?;

    let command = body
        .try_into_command()
        .map_err(|e| registration_error(e.into()))?;

    state
        .auth_service
        .register(command)
        .await
        .map_err(registration_error)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageResponseData {
                    message: "User registered successfully".to_string(),
                },
            )
        })
}

/// HTTP request body for registration (raw JSON).
///
/// Fields are optional so a missing field is reported the same way as an
/// empty one.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ValidationError> {
        let name = DisplayName::new(self.name.unwrap_or_default())?;
        let email = EmailAddress::new(self.email.unwrap_or_default())?;
        let password = Password::new(self.password.unwrap_or_default())?;
        Ok(RegisterCommand::new(name, email, password))
    }
}

// Duplicate accounts and storage failures share one response so the endpoint
// cannot be used to probe for registered emails.
fn registration_error(err: AuthError) -> ApiError {
    match err {
        AuthError::Validation(e) => {
            tracing::warn!(error = %e, "Rejected registration request");
            ApiError::BadRequest(e.to_string())
        }
        AuthError::DuplicateAccount(_) => {
            tracing::warn!(error = %err, "Registration rejected");
            ApiError::InternalServerError("Registration failed".to_string())
        }
        _ => {
            tracing::error!(error = %err, "Registration failed");
            ApiError::InternalServerError("Registration failed".to_string())
        }
    }
}
