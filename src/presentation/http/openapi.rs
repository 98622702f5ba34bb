// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::cakes::list_cakes,
        crate::presentation::http::controllers::cakes::get_cake,
        crate::presentation::http::controllers::cakes::get_cake_by_slug,
        crate::presentation::http::controllers::cakes::create_cake,
        crate::presentation::http::controllers::cakes::update_cake,
        crate::presentation::http::controllers::orders::create_order,
        crate::presentation::http::controllers::orders::create_quick_order,
        crate::presentation::http::controllers::orders::list_orders,
        crate::presentation::http::controllers::orders::get_order,
        crate::presentation::http::controllers::orders::update_order_status,
        crate::presentation::http::controllers::settings::get_telegram_settings,
        crate::presentation::http::controllers::settings::update_telegram_settings,
        crate::presentation::http::controllers::settings::send_test_notification
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::cakes::CreateCakeRequest,
            crate::presentation::http::controllers::cakes::UpdateCakeRequest,
            crate::presentation::http::controllers::orders::CheckoutItemRequest,
            crate::presentation::http::controllers::orders::CreateOrderRequest,
            crate::presentation::http::controllers::orders::QuickOrderRequest,
            crate::presentation::http::controllers::orders::UpdateOrderStatusRequest,
            crate::presentation::http::controllers::settings::UpdateTelegramSettingsRequest,
            crate::presentation::http::controllers::settings::TestNotificationResponse,
            crate::application::dto::CakeDto,
            crate::application::dto::OrderDto,
            crate::application::dto::OrderItemDto,
            crate::application::dto::NotificationSettingsDto
        )
    ),
    tags(
        (name = "System", description = "Service endpoints."),
        (name = "Cakes", description = "Catalog browsing and administration."),
        (name = "Orders", description = "Cart and quick-order checkout, status tracking."),
        (name = "Admin", description = "Notification settings.")
    ),
    info(
        title = "Cake Shop API",
        description = "API for browsing and ordering cakes.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
