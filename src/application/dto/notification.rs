use crate::domain::notification::NotificationSettings;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationSettingsDto {
    pub bot_token: Option<String>,
    pub chat_id_1: Option<String>,
    pub label_1: Option<String>,
    pub is_active_1: bool,
    pub chat_id_2: Option<String>,
    pub label_2: Option<String>,
    pub is_active_2: bool,
    pub chat_id_3: Option<String>,
    pub label_3: Option<String>,
    pub is_active_3: bool,
    pub is_active: bool,
}

impl From<NotificationSettings> for NotificationSettingsDto {
    fn from(settings: NotificationSettings) -> Self {
        Self {
            bot_token: settings.bot_token,
            chat_id_1: settings.chat_id_1,
            label_1: settings.label_1,
            is_active_1: settings.is_active_1,
            chat_id_2: settings.chat_id_2,
            label_2: settings.label_2,
            is_active_2: settings.is_active_2,
            chat_id_3: settings.chat_id_3,
            label_3: settings.label_3,
            is_active_3: settings.is_active_3,
            is_active: settings.is_active,
        }
    }
}
