//! API layer - HTTP endpoint handlers for the demo gateway.

mod body;
mod contract;
mod health;
mod node;
mod routes;

pub use contract::{deploy_contract, ContractRequest, DeployContractResponse};
pub use health::{health, status, HealthCheckResponse, StatusResponse, STATUS_DESCRIPTION};
pub use node::{start_node, NodeRequest, StartNodeResponse};
pub use routes::api_routes;
