use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::DonorResponseData;
use crate::domain::donor::ports::DonorServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_donors<S: DonorServicePort>(
    State(state): State<AppState<S>>,
) -> Result<ApiSuccess<Vec<DonorResponseData>>, ApiError> {
    state
        .donor_service
        .list()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch donor records");
            ApiError::InternalServerError("Failed to fetch data".to_string())
        })
        .map(|donors| {
            ApiSuccess::new(
                StatusCode::OK,
                donors.iter().map(DonorResponseData::from).collect(),
            )
        })
}
