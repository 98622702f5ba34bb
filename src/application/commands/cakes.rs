// src/application/commands/cakes.rs
use crate::{
    application::{
        dto::CakeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        catalog::{
            CakeId, CakeName, CakeReadRepository, CakeSlug, CakeUpdate, CakeWriteRepository,
            NewCake, services::CakeSlugService,
        },
        errors::DomainError,
    },
};
use std::sync::Arc;

pub struct CreateCakeCommand {
    pub name: String,
    /// Explicit slug from the owner; left `None` to derive one from the name.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub weight: Option<f64>,
    pub ingredients: Option<String>,
    pub shelf_life: Option<String>,
    pub category: Option<String>,
}

pub struct UpdateCakeCommand {
    pub id: i64,
    pub name: Option<String>,
    /// Present only when the owner explicitly replaces the slug. A name
    /// change alone never recomputes it.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub weight: Option<f64>,
    pub ingredients: Option<String>,
    pub shelf_life: Option<String>,
    pub category: Option<String>,
}

pub struct CakeCommandService {
    write_repo: Arc<dyn CakeWriteRepository>,
    read_repo: Arc<dyn CakeReadRepository>,
    slug_service: Arc<CakeSlugService>,
}

impl CakeCommandService {
    pub fn new(
        write_repo: Arc<dyn CakeWriteRepository>,
        read_repo: Arc<dyn CakeReadRepository>,
        slug_service: Arc<CakeSlugService>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
        }
    }

    pub async fn create_cake(&self, command: CreateCakeCommand) -> ApplicationResult<CakeDto> {
        let name = CakeName::new(command.name)?;

        let slug = match command.slug {
            Some(explicit) => {
                let slug = CakeSlug::new(explicit)?;
                if self.read_repo.find_by_slug(&slug).await?.is_some() {
                    return Err(ApplicationError::conflict("slug already exists"));
                }
                slug
            }
            None => {
                self.slug_service
                    .generate_unique_slug(&name, command.category.as_deref(), None)
                    .await?
            }
        };

        let new_cake = NewCake {
            name,
            slug: Some(slug),
            description: command.description,
            price: command.price,
            image_url: command.image_url,
            is_available: command.is_available,
            weight: command.weight,
            ingredients: command.ingredients,
            shelf_life: command.shelf_life,
            category: command.category,
        };

        let created = self.write_repo.insert(new_cake).await?;
        Ok(created.into())
    }

    pub async fn update_cake(&self, command: UpdateCakeCommand) -> ApplicationResult<CakeDto> {
        let id = CakeId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("cake not found"))?;

        let mut update = CakeUpdate::new(id);

        if let Some(name) = command.name {
            update = update.with_name(CakeName::new(name)?);
        }
        if let Some(explicit) = command.slug {
            let slug = CakeSlug::new(explicit)?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(holder) if holder.id != id => {
                    return Err(ApplicationError::conflict("slug already exists"));
                }
                _ => {}
            }
            update = update.with_slug(slug);
        }
        if let Some(price) = command.price {
            update = update.with_price(price);
        }
        update.description = command.description;
        update.image_url = command.image_url;
        update.is_available = command.is_available;
        update.weight = command.weight;
        update.ingredients = command.ingredients;
        update.shelf_life = command.shelf_life;
        update.category = command.category;

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    /// One-time migration pass: assign a slug to every catalog row that has
    /// none. Already-slugged rows are skipped, so re-running is a no-op.
    /// A uniqueness violation raced in by a concurrent writer re-probes
    /// instead of failing the batch.
    pub async fn backfill_slugs(&self) -> ApplicationResult<u32> {
        const BATCH: u32 = 200;
        const MAX_PROBE_RETRIES: u32 = 5;

        let mut assigned = 0u32;
        let mut offset = 0u32;

        loop {
            let batch = self.read_repo.list(BATCH, offset).await?;
            let batch_len = batch.len() as u32;

            for cake in batch {
                if cake.slug.is_some() {
                    continue;
                }

                let mut attempt = 0;
                loop {
                    let slug = self
                        .slug_service
                        .generate_unique_slug(&cake.name, cake.category.as_deref(), Some(cake.id))
                        .await?;
                    let update = CakeUpdate::new(cake.id).with_slug(slug.clone());
                    match self.write_repo.update(update).await {
                        Ok(_) => {
                            tracing::info!(
                                cake_id = i64::from(cake.id),
                                slug = slug.as_str(),
                                "assigned slug"
                            );
                            assigned += 1;
                            break;
                        }
                        Err(DomainError::Conflict(_)) if attempt < MAX_PROBE_RETRIES => {
                            // Another writer claimed the candidate between
                            // probe and commit; probe again.
                            attempt += 1;
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
            }

            if batch_len < BATCH {
                break;
            }
            offset += BATCH;
        }

        Ok(assigned)
    }
}
