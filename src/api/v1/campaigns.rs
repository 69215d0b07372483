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
pub struct CreateCampaignApiRequest {
    /// Minimum contribution in wei, decimal string
    pub minimum_contribution: String,
}

impl Validate for CreateCampaignApiRequest {
    fn validate(&self) -> ValidationResult<()> {
        let results = vec![Validator::validate_wei_amount(
            &self.minimum_contribution,
            "minimum_contribution",
        )];

        Validator::combine_results(results)
    }
}

#[derive(Debug, Deserialize)]
pub struct ContributeApiRequest {
    /// Contribution amount in wei, decimal string
    pub amount: String,
}

impl Validate for ContributeApiRequest {
    fn validate(&self) -> ValidationResult<()> {
        let results = vec![Validator::validate_wei_amount(&self.amount, "amount")];

        Validator::combine_results(results)
    }
}

// ============ READ OPERATIONS ============

/// Campaign list: every campaign address the factory has deployed.
pub async fn list_campaigns(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let service = create_read_only_service(&state)?;
    let campaigns = service.deployed_campaigns().await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "campaigns": campaigns },
        "error": null
    })))
}

/// Campaign detail: the current on-chain summary snapshot.
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Validator::validate_ethereum_address(&address, "address").map_err(|e| vec![e])?;

    let service = create_read_only_service(&state)?;
    let summary = service.campaign_summary(&address).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": summary,
        "error": null
    })))
}

// ============ WRITE OPERATIONS ============

/// Create a new campaign with the given minimum contribution.
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(request): Json<CreateCampaignApiRequest>,
) -> ApiResult<impl IntoResponse> {
    request
        .validate()
        .map_err(ApiError::from_validation_errors)?;

    let service = create_campaign_service(&state).await?;
    let outcome = service
        .create_campaign(&request.minimum_contribution)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": outcome,
        "error": null
    })))
}

/// Contribute to a campaign; at or above the minimum this records the sender
/// as an approver.
pub async fn contribute(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Json(request): Json<ContributeApiRequest>,
) -> ApiResult<impl IntoResponse> {
    Validator::validate_ethereum_address(&address, "address").map_err(|e| vec![e])?;
    request
        .validate()
        .map_err(ApiError::from_validation_errors)?;

    let service = create_campaign_service(&state).await?;
    let outcome = service.contribute(&address, &request.amount).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": outcome,
        "error": null
    })))
}
