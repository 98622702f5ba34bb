use crate::domain::catalog::entity::{Cake, CakeUpdate, NewCake};
use crate::domain::catalog::value_objects::{CakeId, CakeSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CakeWriteRepository: Send + Sync {
    async fn insert(&self, cake: NewCake) -> DomainResult<Cake>;
    async fn update(&self, update: CakeUpdate) -> DomainResult<Cake>;
}

#[async_trait]
pub trait CakeReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CakeId) -> DomainResult<Option<Cake>>;
    async fn find_by_slug(&self, slug: &CakeSlug) -> DomainResult<Option<Cake>>;
    async fn list(&self, limit: u32, offset: u32) -> DomainResult<Vec<Cake>>;
}
