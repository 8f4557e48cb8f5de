//! Liveness, readiness and a detailed status report for orchestrators.
//!
//! Storage is probed through the game service, so the same handlers work
//! for the postgres and the in-memory backend.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::api::doc::HEALTH_TAG;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    fn status_code(self) -> StatusCode {
        match self {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Outcome of probing one dependency.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    pub message: Option<String>,
    pub response_time_ms: Option<u64>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// RFC 3339
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
    /// Keyed by component name
    pub checks: BTreeMap<String, ComponentHealth>,
}

pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health_check))
        .routes(routes!(readiness_check))
        .routes(routes!(liveness_check))
}

/// Full report with per component timings.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "All components answer", body = HealthResponse),
        (status = 503, description = "At least one component failed", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = probe_storage(&state).await;
    let status = storage.status;

    let report = HealthResponse {
        status,
        version: state.version.clone(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks: BTreeMap::from([("storage".to_string(), storage)]),
    };
    (status.status_code(), Json(report))
}

/// 200 once storage answers, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Ready to take traffic"),
        (status = 503, description = "Storage unreachable")
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    probe_storage(&state).await.status.status_code()
}

#[utoipa::path(
    get,
    path = "/health/live",
    tag = HEALTH_TAG,
    responses((status = 200, description = "Process is serving requests"))
)]
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

async fn probe_storage(state: &AppState) -> ComponentHealth {
    let started = Instant::now();
    let outcome = state.services.games.storage_ready().await;
    let response_time_ms = Some(started.elapsed().as_millis() as u64);

    let (status, message) = match outcome {
        Ok(()) => (HealthStatus::Healthy, "Connected".to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            (HealthStatus::Unhealthy, e.to_string())
        }
    };
    ComponentHealth {
        status,
        message: Some(message),
        response_time_ms,
    }
}
