// src/presentation/http/controllers/settings.rs
use crate::application::{
    commands::settings::UpdateNotificationSettingsCommand, dto::NotificationSettingsDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTelegramSettingsRequest {
    pub bot_token: Option<String>,
    pub chat_id_1: Option<String>,
    pub label_1: Option<String>,
    pub is_active_1: Option<bool>,
    pub chat_id_2: Option<String>,
    pub label_2: Option<String>,
    pub is_active_2: Option<bool>,
    pub chat_id_3: Option<String>,
    pub label_3: Option<String>,
    pub is_active_3: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TestNotificationResponse {
    pub delivered: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/telegram",
    responses((status = 200, description = "Current notification settings.", body = NotificationSettingsDto)),
    tag = "Admin"
)]
pub async fn get_telegram_settings(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<NotificationSettingsDto>> {
    state
        .services
        .notification_settings
        .get_settings()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/telegram",
    request_body = UpdateTelegramSettingsRequest,
    responses((status = 200, description = "Settings updated.", body = NotificationSettingsDto)),
    tag = "Admin"
)]
pub async fn update_telegram_settings(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UpdateTelegramSettingsRequest>,
) -> HttpResult<Json<NotificationSettingsDto>> {
    let command = UpdateNotificationSettingsCommand {
        bot_token: payload.bot_token,
        chat_id_1: payload.chat_id_1,
        label_1: payload.label_1,
        is_active_1: payload.is_active_1,
        chat_id_2: payload.chat_id_2,
        label_2: payload.label_2,
        is_active_2: payload.is_active_2,
        chat_id_3: payload.chat_id_3,
        label_3: payload.label_3,
        is_active_3: payload.is_active_3,
        is_active: payload.is_active,
    };

    state
        .services
        .notification_settings
        .update_settings(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/telegram/test",
    responses((status = 200, description = "Delivery attempted.", body = TestNotificationResponse)),
    tag = "Admin"
)]
pub async fn send_test_notification(
    Extension(state): Extension<HttpState>,
) -> Json<TestNotificationResponse> {
    let delivered = state.services.notification_settings.send_test().await;
    Json(TestNotificationResponse { delivered })
}
