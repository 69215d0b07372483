use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Validation error types for API requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// Trait for request types that can validate themselves
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Validation utilities for API requests
pub struct Validator;

impl Validator {
    /// Validate Ethereum address format
    pub fn validate_ethereum_address(address: &str, field_name: &str) -> Result<(), ValidationError> {
        if address.is_empty() {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: "Address cannot be empty".to_string(),
            });
        }

        // Remove 0x prefix if present
        let clean_address = address.strip_prefix("0x").unwrap_or(address);

        // Check if it's exactly 40 hex characters
        if clean_address.len() != 40 {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: "Address must be 40 characters long (excluding 0x prefix)".to_string(),
            });
        }

        // Check if all characters are valid hex
        if !clean_address.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: "Address must contain only hexadecimal characters".to_string(),
            });
        }

        if address.parse::<Address>().is_err() {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: "Invalid Ethereum address format".to_string(),
            });
        }

        Ok(())
    }

    /// Validate a wei amount given as a decimal string
    pub fn validate_wei_amount(amount: &str, field_name: &str) -> Result<(), ValidationError> {
        if amount.is_empty() {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: format!("{} cannot be empty", field_name),
            });
        }

        if !amount.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: format!("{} must be a non-negative integer in wei", field_name),
            });
        }

        // U256 holds at most 78 decimal digits
        if amount.len() > 78 {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: format!("{} exceeds the maximum representable amount", field_name),
            });
        }

        Ok(())
    }

    /// Validate string length constraints
    pub fn validate_string(
        value: &str,
        field_name: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<(), ValidationError> {
        let length = value.trim().len();

        if length < min_length {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: format!("{} must be at least {} characters long", field_name, min_length),
            });
        }

        if length > max_length {
            return Err(ValidationError {
                field: field_name.to_string(),
                message: format!("{} must be at most {} characters long", field_name, max_length),
            });
        }

        Ok(())
    }

    /// Combine multiple validation results, collecting every error
    pub fn combine_results(results: Vec<Result<(), ValidationError>>) -> ValidationResult<()> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(Result::err).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
