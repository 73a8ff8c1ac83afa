//! HTTP routes.
//!
//! Each `POST /waitlist` plays one page visit: a fresh
//! `EnrollmentController` takes the submission and its terminal state is
//! rendered as the response.

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use waitlist_enrollment::{EnrollmentController, Metrics, WaitlistApi};
use waitlist_telemetry::log_enrollment_event;

use crate::domain::config::GatewayConfig;
use crate::domain::types::{status_for, EnrollRequest, EnrollmentResponse};
use crate::middleware::create_cors_layer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn WaitlistApi>,
    /// Counters the service behind `api` reports to
    pub metrics: Arc<Metrics>,
}

/// Build the HTTP router
pub fn build_router(
    api: Arc<dyn WaitlistApi>,
    metrics: Arc<Metrics>,
    config: &GatewayConfig,
) -> Router {
    let state = AppState { api, metrics };

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(&config.cors));

    Router::new()
        .route("/waitlist", post(handle_enroll))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_snapshot))
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
        .layer(middleware)
        .with_state(state)
}

/// Submit an email to the waitlist
async fn handle_enroll(
    State(state): State<AppState>,
    Json(request): Json<EnrollRequest>,
) -> impl IntoResponse {
    let controller = EnrollmentController::new(Arc::clone(&state.api));
    let outcome = controller.submit(&request.email).await;

    let phase = controller.phase();
    log_enrollment_event!(
        debug,
        "gateway",
        "Rendered enrollment",
        request.email,
        outcome = ?outcome,
        phase = ?phase
    );

    (status_for(phase), Json(EnrollmentResponse::from(phase)))
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// Enrollment counters and store latencies
async fn metrics_snapshot(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}
