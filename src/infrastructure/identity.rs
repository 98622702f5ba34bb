// src/infrastructure/identity.rs
use crate::application::error::ApplicationResult;
use crate::application::ports::identity::IdentityContext;
use crate::domain::order::UserId;
use async_trait::async_trait;

/// Identity context for deployments without the external auth service
/// wired in: every request resolves to guest. Swap this for an adapter to
/// the real identity provider to attach orders to accounts.
#[derive(Default, Clone)]
pub struct GuestIdentity;

#[async_trait]
impl IdentityContext for GuestIdentity {
    async fn resolve(&self, _token: &str) -> ApplicationResult<Option<UserId>> {
        Ok(None)
    }
}
