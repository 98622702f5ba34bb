// src/application/commands/settings.rs
use crate::{
    application::{
        dto::NotificationSettingsDto,
        error::{ApplicationError, ApplicationResult},
        ports::notification::NotificationSink,
    },
    domain::notification::{NotificationSettingsRepository, NotificationSettingsUpdate},
};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct UpdateNotificationSettingsCommand {
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

/// Admin surface for the notification settings singleton. The row itself is
/// created once at bootstrap via `ensure_default`, never lazily here.
pub struct NotificationSettingsService {
    repo: Arc<dyn NotificationSettingsRepository>,
    notifier: Arc<dyn NotificationSink>,
}

impl NotificationSettingsService {
    pub fn new(
        repo: Arc<dyn NotificationSettingsRepository>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self { repo, notifier }
    }

    pub async fn get_settings(&self) -> ApplicationResult<NotificationSettingsDto> {
        let settings = self
            .repo
            .get()
            .await?
            .ok_or_else(|| ApplicationError::not_found("notification settings not initialised"))?;
        Ok(settings.into())
    }

    pub async fn update_settings(
        &self,
        command: UpdateNotificationSettingsCommand,
    ) -> ApplicationResult<NotificationSettingsDto> {
        let update = NotificationSettingsUpdate {
            bot_token: command.bot_token,
            chat_id_1: command.chat_id_1,
            label_1: command.label_1,
            is_active_1: command.is_active_1,
            chat_id_2: command.chat_id_2,
            label_2: command.label_2,
            is_active_2: command.is_active_2,
            chat_id_3: command.chat_id_3,
            label_3: command.label_3,
            is_active_3: command.is_active_3,
            is_active: command.is_active,
        };
        let settings = self.repo.update(update).await?;
        Ok(settings.into())
    }

    /// Push a test message through the sink. Reports delivery as a boolean;
    /// a failing sink is an answer here, not an error.
    pub async fn send_test(&self) -> bool {
        match self
            .notifier
            .send("✅ Тестове повідомлення від кондитерської")
            .await
        {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "test notification failed");
                false
            }
        }
    }
}
