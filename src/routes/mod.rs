pub mod docs;
pub mod health;
pub mod repositories;

use axum::routing::get;
use axum::Router;
use http::{header, Method};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Routes logged at startup.
#[derive(Debug, Clone, Copy)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
}

pub const ROUTES: &[RouteDoc] = &[
    RouteDoc { method: "GET", path: "/api/v1/repositories" },
    RouteDoc { method: "GET", path: "/health" },
    RouteDoc { method: "GET", path: "/" },
    RouteDoc { method: "GET", path: "/api-docs" },
];

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/repositories", get(repositories::find_many));

    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Request ID
    let x_request_id = http::HeaderName::from_static("x-request-id");

    Router::new()
        .route("/", get(docs::landing))
        .route("/health", get(health::health))
        .route("/api-docs", get(docs::api_docs))
        .route("/api-docs/", get(docs::api_docs))
        .nest("/api/v1", api_routes)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
