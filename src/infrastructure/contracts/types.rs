use serde::{Deserialize, Serialize};

// ============ CONTRACT CONFIGURATION TYPES ============

/// Network configuration
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub rpc_url: String,
    pub explorer_url: String,
    pub native_currency: NativeCurrency,
}

impl NetworkConfig {
    /// Block-explorer link for a transaction hash, if the network has an explorer.
    pub fn explorer_tx_url(&self, tx_hash: &str) -> Option<String> {
        if self.explorer_url.is_empty() {
            None
        } else {
            Some(format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), tx_hash))
        }
    }
}

/// Native currency information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

// ============ TRANSACTION TYPES ============

/// Outcome of a mined state-changing call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionOutcome {
    pub transaction_hash: String,
    pub block_number: u64,
    pub explorer_url: Option<String>,
}

// ============ ERROR TYPES ============

/// Contract interaction errors
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Transaction failed: {0}")]
    TransactionError(String),

    #[error("Contract call failed: {0}")]
    ContractCallError(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Contract artifact error: {0}")]
    ArtifactError(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Spending request not found: {index}")]
    RequestNotFound { index: u64 },

    #[error("Spending request {index} is already finalized")]
    AlreadyFinalized { index: u64 },

    #[error("Quorum not reached: {approvals} of {approvers} approvers")]
    QuorumNotReached { approvals: u64, approvers: u64 },
}
