// src/infrastructure/notification.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::notification::NotificationSink;
use crate::domain::notification::NotificationSettingsRepository;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Telegram Bot API sink. Settings are read per send so admin edits take
/// effect without a restart; the HTTP client carries a hard timeout so a
/// slow Telegram can never hold up an order response for long.
pub struct TelegramNotifier {
    settings: Arc<dyn NotificationSettingsRepository>,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(
        settings: Arc<dyn NotificationSettingsRepository>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { settings, client })
    }
}

#[async_trait]
impl NotificationSink for TelegramNotifier {
    async fn send(&self, text: &str) -> ApplicationResult<()> {
        let settings = self.settings.get().await?.ok_or_else(|| {
            ApplicationError::infrastructure("notification settings not initialised")
        })?;

        let recipients = settings.recipients();
        if recipients.is_empty() {
            tracing::debug!("notifications disabled or no active chats, skipping send");
            return Ok(());
        }

        let token = settings
            .bot_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::infrastructure("telegram bot token is not configured")
            })?;
        let url = format!("https://api.telegram.org/bot{token}/sendMessage");

        let mut delivered = false;
        let mut last_failure = None;
        for chat_id in recipients {
            let result = self
                .client
                .post(&url)
                .json(&json!({ "chat_id": chat_id, "text": text }))
                .send()
                .await;
            match result {
                Ok(response) if response.status().is_success() => delivered = true,
                Ok(response) => {
                    last_failure = Some(format!("telegram API returned {}", response.status()));
                }
                Err(err) => last_failure = Some(err.to_string()),
            }
        }

        if delivered {
            Ok(())
        } else {
            Err(ApplicationError::infrastructure(
                last_failure.unwrap_or_else(|| "telegram delivery failed".into()),
            ))
        }
    }
}
