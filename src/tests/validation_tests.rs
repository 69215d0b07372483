use crate::api::v1::campaigns::{ContributeApiRequest, CreateCampaignApiRequest};
use crate::api::v1::requests::CreateSpendingApiRequest;
use crate::api::validation::{Validate, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_campaign_request_validation_success() {
        let request = CreateCampaignApiRequest {
            minimum_contribution: "100".to_string(),
        };

        let result = request.validate();
        assert!(result.is_ok(), "Valid request should pass validation");
    }

    #[test]
    fn test_create_campaign_request_rejects_non_numeric_minimum() {
        let request = CreateCampaignApiRequest {
            minimum_contribution: "one hundred".to_string(),
        };

        let result = request.validate();
        assert!(result.is_err());

        let errors = result.unwrap_err();
        assert!(errors.iter().any(|e| e.field == "minimum_contribution"));
    }

    #[test]
    fn test_contribute_request_rejects_empty_amount() {
        let request = ContributeApiRequest {
            amount: "".to_string(),
        };

        let result = request.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_contribute_request_rejects_negative_amount() {
        let request = ContributeApiRequest {
            amount: "-5".to_string(),
        };

        let result = request.validate();
        assert!(result.is_err(), "Sign characters are not valid wei amounts");
    }

    #[test]
    fn test_spending_request_validation_success() {
        let request = CreateSpendingApiRequest {
            description: "Buy batteries".to_string(),
            value: "5000000000000000000".to_string(),
            recipient: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_string(),
        };

        let result = request.validate();
        assert!(result.is_ok(), "Valid request should pass validation");
    }

    #[test]
    fn test_spending_request_rejects_invalid_recipient() {
        let request = CreateSpendingApiRequest {
            description: "Buy batteries".to_string(),
            value: "100".to_string(),
            recipient: "not_an_address".to_string(),
        };

        let result = request.validate();
        assert!(result.is_err());

        let errors = result.unwrap_err();
        assert!(errors.iter().any(|e| e.field == "recipient"));
    }

    #[test]
    fn test_spending_request_collects_every_error() {
        let request = CreateSpendingApiRequest {
            description: "".to_string(),
            value: "5.5".to_string(),
            recipient: "0x123".to_string(),
        };

        let result = request.validate();
        assert!(result.is_err());

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 3, "All invalid fields should be reported");
    }

    #[test]
    fn test_address_validator_accepts_checksummed_address() {
        let result = Validator::validate_ethereum_address(
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "address",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_address_validator_rejects_short_address() {
        let result = Validator::validate_ethereum_address("0x1234", "address");
        assert!(result.is_err());
    }

    #[test]
    fn test_address_validator_rejects_non_hex_characters() {
        let result = Validator::validate_ethereum_address(
            "0xZZZZd6e51aad88F6F4ce6aB8827279cffFb92266",
            "address",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_wei_validator_rejects_oversized_amount() {
        // One digit past what a 256-bit amount can hold
        let oversized = "9".repeat(79);
        let result = Validator::validate_wei_amount(&oversized, "amount");
        assert!(result.is_err());
    }

    #[test]
    fn test_wei_validator_accepts_zero() {
        let result = Validator::validate_wei_amount("0", "amount");
        assert!(result.is_ok());
    }
}
