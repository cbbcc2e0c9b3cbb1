use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::contract::deploy_contract;
use super::health::{health, status};
use super::node::start_node;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Status
        .route("/health", get(health))
        .route("/status", get(status))
        // Stub actions
        .route("/start-node", post(start_node))
        .route("/deploy-contract", post(deploy_contract))
}
