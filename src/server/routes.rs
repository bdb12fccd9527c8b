// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{describe_upload_handler, describe_url_handler, not_found_handler};
use super::middleware::request_id_layers;
use crate::config::AppConfig;
use crate::deepseek::VisionClient;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub vision_client: Arc<VisionClient>,
}

pub fn create_router(config: AppConfig, vision_client: VisionClient) -> Router {
    // Oversized uploads must still reach the handler so it can answer with
    // the proper 400; the transport cap only guards against runaway bodies.
    let body_cap = config.upload.limit_bytes.saturating_mul(4);

    let state = AppState {
        config,
        vision_client: Arc::new(vision_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        // Unmatched methods on "/" get the same uniform 404 as unknown paths
        .route(
            "/",
            get(describe_url_handler)
                .post(describe_upload_handler)
                .fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(body_cap))
        .layer(tower_http::limit::RequestBodyLimitLayer::new(body_cap))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
