use crate::domain::errors::DomainResult;
use crate::domain::notification::entity::{NotificationSettings, NotificationSettingsUpdate};
use async_trait::async_trait;

#[async_trait]
pub trait NotificationSettingsRepository: Send + Sync {
    /// Create the singleton row with defaults if it does not exist yet.
    /// Called once at bootstrap; idempotent.
    async fn ensure_default(&self) -> DomainResult<NotificationSettings>;

    async fn get(&self) -> DomainResult<Option<NotificationSettings>>;

    async fn update(
        &self,
        update: NotificationSettingsUpdate,
    ) -> DomainResult<NotificationSettings>;
}
