use serde::Serialize;

/// Lifecycle of a spending request as observed from its on-chain fields.
///
/// The derived state is advisory: it drives display and preflight checks,
/// while the contract remains authoritative. A rejected transaction is always
/// the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    /// Open for approval votes
    Pending,
    /// Enough approvals to be finalized by the manager
    QuorumReached,
    /// Funds transferred, completion flag set
    Finalized,
}

/// Whether the approval count constitutes a quorum: strictly more than half
/// of the approvers. With zero approvers a quorum is never reached.
pub fn quorum_reached(approval_count: u64, approvers_count: u64) -> bool {
    (approval_count as u128) * 2 > approvers_count as u128
}

/// Derive the lifecycle state from a request's on-chain fields.
pub fn request_state(complete: bool, approval_count: u64, approvers_count: u64) -> RequestState {
    if complete {
        RequestState::Finalized
    } else if quorum_reached(approval_count, approvers_count) {
        RequestState::QuorumReached
    } else {
        RequestState::Pending
    }
}
