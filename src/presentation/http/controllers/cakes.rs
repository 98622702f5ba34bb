// src/presentation/http/controllers/cakes.rs
use crate::application::{
    commands::cakes::{CreateCakeCommand, UpdateCakeCommand},
    dto::CakeDto,
    queries::cakes::ListCakesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
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

fn default_available() -> bool {
    true
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CakeListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCakeRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub shelf_life: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCakeRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub weight: Option<f64>,
    pub ingredients: Option<String>,
    pub shelf_life: Option<String>,
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/cakes",
    params(CakeListParams),
    responses((status = 200, description = "Catalog page.", body = [CakeDto])),
    tag = "Cakes"
)]
pub async fn list_cakes(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CakeListParams>,
) -> HttpResult<Json<Vec<CakeDto>>> {
    state
        .services
        .cake_queries
        .list_cakes(ListCakesQuery {
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/cakes/{id}",
    params(("id" = i64, Path, description = "Cake id")),
    responses(
        (status = 200, description = "Cake found.", body = CakeDto),
        (status = 404, description = "Cake not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Cakes"
)]
pub async fn get_cake(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CakeDto>> {
    state
        .services
        .cake_queries
        .get_cake_by_id(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/cakes/by-slug/{slug}",
    params(("slug" = String, Path, description = "Cake slug")),
    responses(
        (status = 200, description = "Cake found.", body = CakeDto),
        (status = 404, description = "Cake not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Cakes"
)]
pub async fn get_cake_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CakeDto>> {
    state
        .services
        .cake_queries
        .get_cake_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/cakes",
    request_body = CreateCakeRequest,
    responses((status = 200, description = "Cake created with a unique slug.", body = CakeDto)),
    tag = "Cakes"
)]
pub async fn create_cake(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCakeRequest>,
) -> HttpResult<Json<CakeDto>> {
    let command = CreateCakeCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
        is_available: payload.is_available,
        weight: payload.weight,
        ingredients: payload.ingredients,
        shelf_life: payload.shelf_life,
        category: payload.category,
    };

    state
        .services
        .cake_commands
        .create_cake(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/cakes/{id}",
    params(("id" = i64, Path, description = "Cake id")),
    request_body = UpdateCakeRequest,
    responses(
        (status = 200, description = "Cake updated.", body = CakeDto),
        (status = 404, description = "Cake not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Cakes"
)]
pub async fn update_cake(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCakeRequest>,
) -> HttpResult<Json<CakeDto>> {
    let command = UpdateCakeCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
        is_available: payload.is_available,
        weight: payload.weight,
        ingredients: payload.ingredients,
        shelf_life: payload.shelf_life,
        category: payload.category,
    };

    state
        .services
        .cake_commands
        .update_cake(command)
        .await
        .into_http()
        .map(Json)
}
