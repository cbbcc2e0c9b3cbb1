//! Domain layer - stub network vocabulary shared by the API handlers.

mod network;

pub use network::{format_pseudo_address, pseudo_contract_address, NetworkStatus, PSEUDO_ADDRESS_PREFIX};
