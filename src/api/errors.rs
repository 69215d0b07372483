use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::validation::ValidationError;
use crate::infrastructure::contracts::types::ContractError;

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub details: Option<serde_json::Value>,
    pub validation_errors: Option<Vec<ValidationError>>,
}

/// API error types with corresponding HTTP status codes
#[derive(Debug)]
pub enum ApiError {
    // Client errors (4xx)
    BadRequest(String),
    ValidationError(Vec<ValidationError>),
    NotFound(String),
    Conflict(String),

    // Server errors (5xx)
    InternalServerError(String),
    ServiceUnavailable(String),

    // Contract-specific errors
    ContractError(ContractError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::ContractError(contract_error) => match contract_error {
                ContractError::InvalidAddress(_) | ContractError::InvalidAmount(_) => {
                    StatusCode::BAD_REQUEST
                }
                ContractError::RequestNotFound { .. } => StatusCode::NOT_FOUND,
                ContractError::AlreadyFinalized { .. }
                | ContractError::QuorumNotReached { .. } => StatusCode::CONFLICT,
                ContractError::RpcError(_) => StatusCode::BAD_GATEWAY,
                ContractError::ArtifactError(_) | ContractError::MissingConfig(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                // Reverted transactions and failed calls are client-side
                ContractError::TransactionError(_) | ContractError::ContractCallError(_) => {
                    StatusCode::BAD_REQUEST
                }
            },
        }
    }

    /// Get the error code string for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            ApiError::ContractError(_) => "CONTRACT_ERROR",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::ValidationError(errors) => {
                if errors.len() == 1 {
                    format!("Validation failed: {}", errors[0].message)
                } else {
                    format!("Validation failed with {} errors", errors.len())
                }
            }
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Conflict(msg) => msg.clone(),
            ApiError::InternalServerError(msg) => msg.clone(),
            ApiError::ServiceUnavailable(msg) => msg.clone(),
            // Surface the failure's message text verbatim
            ApiError::ContractError(contract_error) => contract_error.to_string(),
        }
    }

    /// Convert validation errors to API error
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        ApiError::ValidationError(errors)
    }

    /// Create a bad request error with context
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Create an internal server error with context
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    /// Create a not found error with context
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        let validation_errors = match &self {
            ApiError::ValidationError(errors) => Some(errors.clone()),
            _ => None,
        };

        let details = match &self {
            ApiError::ContractError(contract_error) => Some(serde_json::json!({
                "contract_error_type": format!("{:?}", contract_error)
            })),
            _ => None,
        };

        let error_response = ApiErrorResponse {
            success: false,
            error: message,
            error_code: error_code.to_string(),
            details,
            validation_errors,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<ContractError> for ApiError {
    fn from(error: ContractError) -> Self {
        ApiError::ContractError(error)
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ApiError::ValidationError(errors)
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
