use axum::{body::Bytes, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::body::{decode_first, null_as_empty};

/// Request to start a node. Nothing beyond JSON well-formedness is checked.
#[derive(Debug, Default, Deserialize)]
pub struct NodeRequest {
    /// Node role (e.g., "validator")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub node_type: String,
    /// Optional validator identity
    #[serde(default)]
    pub validator_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartNodeResponse {
    pub message: String,
    pub node_type: String,
}

/// Accept a node start request. No node is actually started.
pub async fn start_node(body: Bytes) -> Result<Json<StartNodeResponse>> {
    let request: NodeRequest =
        decode_first(&body).map_err(AppError::invalid_body("Invalid request body"))?;

    tracing::info!(
        node_type = %request.node_type,
        validator_id = %request.validator_id.as_deref().unwrap_or_default(),
        "Starting node"
    );

    Ok(Json(StartNodeResponse {
        message: "Node start request received".to_string(),
        node_type: request.node_type,
    }))
}
