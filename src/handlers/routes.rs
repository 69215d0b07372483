use axum::Router;
use ethers::types::Address;

use crate::api::v1::create_v1_router;
use crate::infrastructure::contracts::types::NetworkConfig;

#[derive(Clone)]
pub struct AppState {
    pub network: NetworkConfig,
    pub factory_address: Address,
}

pub fn create_router(state: AppState) -> Router {
    Router::new().nest("/v1", create_v1_router(state))
}
