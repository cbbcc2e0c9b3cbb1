use rand::Rng;
use serde::Serialize;

/// Prefix marking a contract address as a placeholder.
pub const PSEUDO_ADDRESS_PREFIX: &str = "0xDEMO";

/// Reported state of the demo network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    Running,
    Synced,
    Pending,
    Maintenance,
}

impl NetworkStatus {
    pub const ALL: [NetworkStatus; 4] = [
        NetworkStatus::Running,
        NetworkStatus::Synced,
        NetworkStatus::Pending,
        NetworkStatus::Maintenance,
    ];

    /// Pick a status uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkStatus::Running => "running",
            NetworkStatus::Synced => "synced",
            NetworkStatus::Pending => "pending",
            NetworkStatus::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a placeholder address: prefix followed by unpadded lowercase hex.
pub fn format_pseudo_address(value: u64) -> String {
    format!("{}{:x}", PSEUDO_ADDRESS_PREFIX, value)
}

/// Generate a placeholder contract address. It has no on-chain meaning.
pub fn pseudo_contract_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format_pseudo_address(rng.random::<u64>())
}
