// src/application/queries/cakes.rs
use crate::{
    application::{
        dto::CakeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{CakeId, CakeReadRepository, CakeSlug},
};
use std::sync::Arc;

pub struct ListCakesQuery {
    pub limit: u32,
    pub offset: u32,
}

pub struct CakeQueryService {
    read_repo: Arc<dyn CakeReadRepository>,
}

impl CakeQueryService {
    pub fn new(read_repo: Arc<dyn CakeReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_cakes(&self, query: ListCakesQuery) -> ApplicationResult<Vec<CakeDto>> {
        let limit = normalize_limit(query.limit);
        let cakes = self.read_repo.list(limit, query.offset).await?;
        Ok(cakes.into_iter().map(Into::into).collect())
    }

    pub async fn get_cake_by_id(&self, id: i64) -> ApplicationResult<CakeDto> {
        let id = CakeId::new(id)?;
        let cake = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("cake not found"))?;
        Ok(cake.into())
    }

    pub async fn get_cake_by_slug(&self, slug: &str) -> ApplicationResult<CakeDto> {
        let slug = CakeSlug::new(slug)?;
        let cake = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("cake not found"))?;
        Ok(cake.into())
    }
}

pub(super) fn normalize_limit(limit: u32) -> u32 {
    const DEFAULT_LIMIT: u32 = 20;
    const MAX_LIMIT: u32 = 100;

    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
