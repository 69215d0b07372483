use crate::domain::lifecycle::{quorum_reached, request_state, RequestState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quorum_requires_strict_majority() {
        // Exactly half of an even approver pool is not a quorum
        assert!(!quorum_reached(2, 4));
        assert!(quorum_reached(3, 4));

        // Odd approver pool
        assert!(!quorum_reached(2, 5));
        assert!(quorum_reached(3, 5));
    }

    #[test]
    fn test_quorum_single_approver() {
        assert!(!quorum_reached(0, 1));
        assert!(quorum_reached(1, 1));
    }

    #[test]
    fn test_quorum_never_reached_without_approvers() {
        assert!(!quorum_reached(0, 0));
    }

    #[test]
    fn test_quorum_does_not_overflow_at_extremes() {
        assert!(quorum_reached(u64::MAX, u64::MAX));
        assert!(!quorum_reached(u64::MAX / 2, u64::MAX));
    }

    #[test]
    fn test_state_pending_before_quorum() {
        assert_eq!(request_state(false, 1, 4), RequestState::Pending);
    }

    #[test]
    fn test_state_quorum_reached() {
        assert_eq!(request_state(false, 3, 4), RequestState::QuorumReached);
    }

    #[test]
    fn test_completion_flag_wins_over_approval_count() {
        // Once finalized, the approval count no longer matters
        assert_eq!(request_state(true, 0, 4), RequestState::Finalized);
        assert_eq!(request_state(true, 4, 4), RequestState::Finalized);
    }

    #[test]
    fn test_state_serializes_snake_case() {
        let serialized = serde_json::to_string(&RequestState::QuorumReached).unwrap();
        assert_eq!(serialized, "\"quorum_reached\"");
    }
}
