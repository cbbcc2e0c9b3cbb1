use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::pseudo_contract_address;
use crate::error::{AppError, Result};
use crate::server::AppState;

use super::body::{decode_first, null_as_empty};

/// Request to deploy a smart contract
#[derive(Debug, Default, Deserialize)]
pub struct ContractRequest {
    /// Contract kind (e.g., "erc20")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contract_type: String,
    /// Opaque constructor parameters
    #[serde(default)]
    pub parameters: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeployContractResponse {
    pub message: String,
    pub contract_type: String,
    /// Placeholder address, see [`pseudo_contract_address`]
    pub contract_address: String,
}

/// Accept a contract deploy request and hand back a pseudo address.
/// Nothing is deployed.
pub async fn deploy_contract(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DeployContractResponse>> {
    let request: ContractRequest =
        decode_first(&body).map_err(AppError::invalid_body("Invalid contract request"))?;

    let contract_address = state.with_rng(|rng| pseudo_contract_address(rng));

    tracing::info!(
        contract_type = %request.contract_type,
        parameters = %request.parameters.as_deref().unwrap_or_default(),
        contract_address = %contract_address,
        "Deploying contract"
    );

    Ok(Json(DeployContractResponse {
        message: "Contract deploy request received".to_string(),
        contract_type: request.contract_type,
        contract_address,
    }))
}
