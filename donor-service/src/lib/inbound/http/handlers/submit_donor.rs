use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::DonorResponseData;
use crate::domain::donor::models::BloodGroup;
use crate::domain::donor::models::DonorName;
use crate::domain::donor::models::SubmitDonorCommand;
use crate::domain::donor::ports::DonorServicePort;
use crate::donor::errors::DonorError;
use crate::donor::errors::ValidationError;
use crate::inbound::http::router::AppState;

pub async fn submit_donor<S: DonorServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<SubmitDonorRequest>, JsonRejection>,
) -> Result<ApiSuccess<DonorResponseData>, ApiError> {
    let Json(body) = payload?;

    let command = body
        .try_into_command()
        .map_err(|e| submission_error(e.into()))?;

    state
        .donor_service
        .submit(command)
        .await
        .map_err(submission_error)
        .map(|donor| ApiSuccess::new(StatusCode::CREATED, DonorResponseData::from(&donor)))
}

fn submission_error(err: DonorError) -> ApiError {
    match err {
        DonorError::Validation(e) => {
            tracing::warn!(error = %e, "Rejected donor submission");
            ApiError::BadRequest(e.to_string())
        }
        e => {
            tracing::error!(error = %e, "Failed to submit donor record");
            ApiError::InternalServerError("Failed to submit data".to_string())
        }
    }
}

/// HTTP request body for a donor submission (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitDonorRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "bloodGroup", alias = "blood_group")]
    blood_group: Option<String>,
}

impl SubmitDonorRequest {
    fn try_into_command(self) -> Result<SubmitDonorCommand, ValidationError> {
        let name = DonorName::new(self.name.unwrap_or_default())?;
        let blood_group: BloodGroup = self.blood_group.unwrap_or_default().parse()?;
        Ok(SubmitDonorCommand::new(name, blood_group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_reads_camel_case_field() {
        let request: SubmitDonorRequest =
            serde_json::from_str(r#"{"name": "Bob", "bloodGroup": "O-"}"#).unwrap();

        let command = request.try_into_command().unwrap();
        assert_eq!(command.name.as_str(), "Bob");
        assert_eq!(command.blood_group, BloodGroup::ONegative);
    }

    #[test]
    fn test_invalid_blood_group_is_bad_request() {
        let request: SubmitDonorRequest =
            serde_json::from_str(r#"{"name": "Bob", "bloodGroup": "Z+"}"#).unwrap();
        let error = request.try_into_command().unwrap_err();

        assert_eq!(
            submission_error(error.into()),
            ApiError::BadRequest("Invalid blood group: Z+".to_string())
        );
    }

    #[test]
    fn test_storage_failure_is_opaque() {
        assert_eq!(
            submission_error(DonorError::StorageFailure("disk full".to_string())),
            ApiError::InternalServerError("Failed to submit data".to_string())
        );
    }

    #[test]
    fn test_request_missing_blood_group() {
        let request: SubmitDonorRequest = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();

        assert_eq!(
            request.try_into_command().unwrap_err(),
            ValidationError::MissingField("bloodGroup")
        );
    }
}
