// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{cakes, orders, settings},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, patch, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/cakes",
            get(cakes::list_cakes).post(cakes::create_cake),
        )
        .route("/api/v1/cakes/by-slug/{slug}", get(cakes::get_cake_by_slug))
        .route(
            "/api/v1/cakes/{id}",
            get(cakes::get_cake).put(cakes::update_cake),
        )
        .route(
            "/api/v1/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/v1/orders/quick", post(orders::create_quick_order))
        .route("/api/v1/orders/{id}", get(orders::get_order))
        .route(
            "/api/v1/orders/{id}/status",
            patch(orders::update_order_status),
        )
        .route(
            "/api/v1/admin/telegram",
            get(settings::get_telegram_settings).put(settings::update_telegram_settings),
        )
        .route(
            "/api/v1/admin/telegram/test",
            post(settings::send_test_notification),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
