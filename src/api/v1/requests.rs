use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::validation::{Validate, ValidationResult, Validator};
use crate::handlers::AppState;

use super::{create_campaign_service, create_read_only_service};

// ============ REQUEST TYPES ============

#[derive(Debug, Deserialize)]
pub struct CreateSpendingApiRequest {
    pub description: String,
    /// Requested value in wei, decimal string
    pub value: String,
    pub recipient: String,
}

impl Validate for CreateSpendingApiRequest {
    fn validate(&self) -> ValidationResult<()> {
        let results = vec![
            Validator::validate_string(&self.description, "description", 1, 1000),
            Validator::validate_wei_amount(&self.value, "value"),
            Validator::validate_ethereum_address(&self.recipient, "recipient"),
        ];

        Validator::combine_results(results)
    }
}

// ============ READ OPERATIONS ============

/// Request list: every spending request with its derived lifecycle state,
/// plus the counts the approval column is rendered from.
pub async fn list_requests(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Validator::validate_ethereum_address(&address, "address").map_err(|e| vec![e])?;

    let service = create_read_only_service(&state)?;
    let listing = service.spending_requests(&address).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": listing,
        "error": null
    })))
}

// ============ WRITE OPERATIONS ============

/// Propose a spending request (manager action).
pub async fn create_request(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Json(request): Json<CreateSpendingApiRequest>,
) -> ApiResult<impl IntoResponse> {
    Validator::validate_ethereum_address(&address, "address").map_err(|e| vec![e])?;
    request
        .validate()
        .map_err(ApiError::from_validation_errors)?;

    let service = create_campaign_service(&state).await?;
    let outcome = service
        .create_request(
            &address,
            request.description,
            &request.value,
            &request.recipient,
        )
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": outcome,
        "error": null
    })))
}

/// Cast an approval vote on a spending request.
pub async fn approve_request(
    State(state): State<AppState>,
    Path((address, index)): Path<(String, u64)>,
) -> ApiResult<impl IntoResponse> {
    Validator::validate_ethereum_address(&address, "address").map_err(|e| vec![e])?;

    let service = create_campaign_service(&state).await?;
    let outcome = service.approve_request(&address, index).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": outcome,
        "error": null
    })))
}

/// Finalize a spending request, transferring its value to the recipient
/// (manager action, requires quorum).
pub async fn finalize_request(
    State(state): State<AppState>,
    Path((address, index)): Path<(String, u64)>,
) -> ApiResult<impl IntoResponse> {
    Validator::validate_ethereum_address(&address, "address").map_err(|e| vec![e])?;

    let service = create_campaign_service(&state).await?;
    let outcome = service.finalize_request(&address, index).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": outcome,
        "error": null
    })))
}
