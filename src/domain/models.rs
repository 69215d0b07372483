use serde::{Deserialize, Serialize};

use crate::domain::lifecycle::RequestState;

// ============ ON-CHAIN SNAPSHOTS ============

/// Read-only campaign summary, re-fetched after every write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub address: String,
    /// Minimum contribution in wei, decimal string
    pub minimum_contribution: String,
    /// Current balance in wei, decimal string
    pub balance: String,
    pub request_count: u64,
    pub approvers_count: u64,
    pub manager: String,
}

/// A manager-proposed withdrawal of campaign funds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingRequest {
    pub index: u64,
    pub description: String,
    /// Requested value in wei, decimal string
    pub value: String,
    pub recipient: String,
    pub approval_count: u64,
    pub complete: bool,
}

/// A spending request together with its derived lifecycle state.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingRequestView {
    #[serde(flatten)]
    pub request: SpendingRequest,
    pub state: RequestState,
}

/// Request-list page data: every request plus the counts the approval
/// columns are rendered from.
#[derive(Debug, Clone, Serialize)]
pub struct RequestListing {
    pub campaign: String,
    pub requests: Vec<SpendingRequestView>,
    pub request_count: u64,
    pub approvers_count: u64,
}

