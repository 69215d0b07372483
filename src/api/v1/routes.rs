use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::AppState;

use super::{
    approve_request, check_connection, contribute, create_campaign, create_request,
    finalize_request, get_campaign, get_network_info, list_campaigns, list_requests,
};

async fn health_check() -> &'static str {
    "OK"
}

pub fn create_v1_router(app_state: AppState) -> Router {
    let allowed_origins = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://0.0.0.0:3000".to_string())
        .split(',')
        .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    // One route per page plus its write action
    let campaign_routes = Router::new()
        .route("/campaigns", get(list_campaigns).post(create_campaign))
        .route("/campaigns/:address", get(get_campaign))
        .route("/campaigns/:address/contribute", post(contribute))
        .route(
            "/campaigns/:address/requests",
            get(list_requests).post(create_request),
        )
        .route(
            "/campaigns/:address/requests/:index/approve",
            post(approve_request),
        )
        .route(
            "/campaigns/:address/requests/:index/finalize",
            post(finalize_request),
        );

    let network_routes = Router::new()
        .route("/network-info", get(get_network_info))
        .route("/check-connection", get(check_connection))
        .route("/health", get(health_check));

    Router::new()
        .merge(campaign_routes)
        .merge(network_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
