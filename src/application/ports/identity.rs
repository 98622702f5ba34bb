// src/application/ports/identity.rs
use crate::application::error::ApplicationResult;
use crate::domain::order::UserId;
use async_trait::async_trait;

/// Session context supplied by the external identity service. Resolves an
/// opaque bearer token to the authenticated user id, or `None` when the
/// token does not denote a session (guest checkout).
#[async_trait]
pub trait IdentityContext: Send + Sync {
    async fn resolve(&self, token: &str) -> ApplicationResult<Option<UserId>>;
}
