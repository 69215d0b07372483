use axum::{extract::State, response::IntoResponse, Json};
use ethers::utils::to_checksum;

use crate::api::errors::ApiResult;
use crate::handlers::AppState;

use super::create_read_only_service;

/// Network metadata a front end needs to render amounts and explorer links.
pub async fn get_network_info(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(serde_json::json!({
        "success": true,
        "data": {
            "chain_id": state.network.chain_id,
            "native_currency": state.network.native_currency,
            "explorer_url": state.network.explorer_url,
            "factory_address": to_checksum(&state.factory_address, None),
        },
        "error": null
    })))
}

/// Whether the configured node answers read calls.
pub async fn check_connection(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let service = create_read_only_service(&state)?;
    let connected = service.is_connected().await;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "connected": connected },
        "error": null
    })))
}
