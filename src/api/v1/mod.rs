pub mod campaigns;
pub mod network;
pub mod requests;
pub mod routes;

pub use campaigns::*;
pub use network::*;
pub use requests::*;
pub use routes::*;

use crate::api::errors::ApiError;
use crate::application::services::{CampaignService, ReadOnlyCampaignService};
use crate::handlers::AppState;

/// Build a signing campaign service for a write request.
pub(crate) async fn create_campaign_service(state: &AppState) -> Result<CampaignService, ApiError> {
    CampaignService::new_with_auto_private_key(state.network.clone(), state.factory_address)
        .await
        .map_err(|e| {
            ApiError::internal_server_error(format!("Failed to create campaign service: {}", e))
        })
}

/// Build a read-only campaign service for a page data fetch.
pub(crate) fn create_read_only_service(state: &AppState) -> Result<ReadOnlyCampaignService, ApiError> {
    ReadOnlyCampaignService::new(state.network.clone(), state.factory_address).map_err(|e| {
        ApiError::internal_server_error(format!("Failed to create read-only service: {}", e))
    })
}
