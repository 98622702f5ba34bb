// src/presentation/http/controllers/orders.rs
use crate::application::{
    commands::orders::{SubmitOrderCommand, SubmittedLine, UpdateOrderStatusCommand},
    dto::OrderDto,
    queries::orders::ListOrdersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeCustomer;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    20
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderListParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutItemRequest {
    pub cake_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub delivery_method: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    pub items: Vec<CheckoutItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuickOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub cake_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub delivery_method: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

impl From<CheckoutItemRequest> for SubmittedLine {
    fn from(item: CheckoutItemRequest) -> Self {
        Self {
            cake_id: item.cake_id,
            quantity: item.quantity,
            flavor: item.flavor,
            weight: item.weight,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order committed; unresolvable lines are dropped.", body = OrderDto),
        (status = 400, description = "Invalid submission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    Extension(state): Extension<HttpState>,
    MaybeCustomer(actor): MaybeCustomer,
    Json(payload): Json<CreateOrderRequest>,
) -> HttpResult<Json<OrderDto>> {
    let command = SubmitOrderCommand::cart(
        payload.customer_name,
        payload.customer_phone,
        payload.delivery_method,
        payload.delivery_date,
        payload.items.into_iter().map(Into::into).collect(),
    );

    state
        .services
        .order_commands
        .submit_order(actor, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/orders/quick",
    request_body = QuickOrderRequest,
    responses(
        (status = 200, description = "Order committed.", body = OrderDto),
        (status = 404, description = "Cake not found; nothing persisted.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_quick_order(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<QuickOrderRequest>,
) -> HttpResult<Json<OrderDto>> {
    let command = SubmitOrderCommand::quick(
        payload.customer_name,
        payload.customer_phone,
        payload.delivery_method,
        payload.delivery_date,
        SubmittedLine {
            cake_id: payload.cake_id,
            quantity: payload.quantity,
            flavor: payload.flavor,
            weight: payload.weight,
        },
    );

    state
        .services
        .order_commands
        .submit_order(None, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(OrderListParams),
    responses((status = 200, description = "Orders, newest first.", body = [OrderDto])),
    tag = "Orders"
)]
pub async fn list_orders(
    Extension(state): Extension<HttpState>,
    Query(params): Query<OrderListParams>,
) -> HttpResult<Json<Vec<OrderDto>>> {
    state
        .services
        .order_queries
        .list_orders(ListOrdersQuery {
            status: params.status,
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found.", body = OrderDto),
        (status = 404, description = "Order not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<OrderDto>> {
    state
        .services
        .order_queries
        .get_order_by_id(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/orders/{id}/status",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated.", body = OrderDto),
        (status = 404, description = "Order not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> HttpResult<Json<OrderDto>> {
    state
        .services
        .order_commands
        .update_order_status(UpdateOrderStatusCommand {
            id,
            status: payload.status,
        })
        .await
        .into_http()
        .map(Json)
}
