use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::donor::models::DonorId;
use crate::domain::donor::ports::DonorServicePort;
use crate::donor::errors::DonorError;
use crate::inbound::http::router::AppState;

pub async fn delete_donor<S: DonorServicePort>(
    State(state): State<AppState<S>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let Path(id) = id?;

    state
        .donor_service
        .delete(DonorId(id))
        .await
        .map_err(|e| match e {
            DonorError::NotFound(id) => {
                tracing::debug!(donor_id = %id, "Delete of unknown donor record");
                ApiError::NotFound("Record not found".to_string())
            }
            e => {
                tracing::error!(error = %e, donor_id = id, "Failed to delete donor record");
                ApiError::InternalServerError("Failed to delete data".to_string())
            }
        })
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData {
                    message: "Record deleted successfully".to_string(),
                },
            )
        })
}
