//! Health check and network status endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::NetworkStatus;
use crate::server::AppState;

pub const STATUS_DESCRIPTION: &str = "Demo status endpoint for the PeoChain network";

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub network_status: NetworkStatus,
    pub description: String,
}

pub async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Mock status of the whole network; the reported state is random.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let network_status = state.with_rng(|rng| NetworkStatus::random(rng));

    Json(StatusResponse {
        network_status,
        description: STATUS_DESCRIPTION.to_string(),
    })
}
