// src/domain/catalog/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::catalog::repository::CakeReadRepository;
use crate::domain::catalog::value_objects::{CakeId, CakeName, CakeSlug};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for catalog items.
///
/// Candidates come from the injected generator; uniqueness is resolved by
/// probing `base`, `base-1`, `base-2`, … against the live catalog. The item
/// being (re)migrated is excluded from the probe via `ignore_id`, so running
/// the backfill over an already-slugged row is a no-op.
pub struct CakeSlugService {
    read_repo: Arc<dyn CakeReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl CakeSlugService {
    pub fn new(read_repo: Arc<dyn CakeReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        name: &CakeName,
        category: Option<&str>,
        ignore_id: Option<CakeId>,
    ) -> DomainResult<CakeSlug> {
        let base = self.generator.slugify(name.as_str(), category);
        // The default generator never yields an empty candidate, but a
        // custom port implementation might.
        let base_slug = if base.is_empty() {
            "cake".to_string()
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = CakeSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id.map(|id| id == existing.id).unwrap_or(false) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{}-{}", base_slug, counter);
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
