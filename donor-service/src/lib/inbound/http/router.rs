use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_donor::delete_donor;
use super::handlers::health::health;
use super::handlers::list_donors::list_donors;
use super::handlers::submit_donor::submit_donor;
use crate::domain::donor::ports::DonorServicePort;

pub struct AppState<S: DonorServicePort> {
    pub donor_service: Arc<S>,
}

impl<S: DonorServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            donor_service: Arc::clone(&self.donor_service),
        }
    }
}

pub fn create_router<S: DonorServicePort>(donor_service: Arc<S>) -> Router {
    let state = AppState { donor_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/submit", post(submit_donor::<S>))
        .route("/data", get(list_donors::<S>))
        .route("/data/:id", delete(delete_donor::<S>))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
