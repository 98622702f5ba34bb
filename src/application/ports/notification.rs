// src/application/ports/notification.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Fire-and-forget outbound message sink. Implementations must bound their
/// own latency; callers treat failure as non-fatal.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, text: &str) -> ApplicationResult<()>;
}
