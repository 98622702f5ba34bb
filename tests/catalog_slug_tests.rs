// tests/catalog_slug_tests.rs
mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use cakeshop_core::application::commands::cakes::{CakeCommandService, CreateCakeCommand, UpdateCakeCommand};
use cakeshop_core::application::error::ApplicationError;
use cakeshop_core::application::ports::util::SlugGenerator;
use cakeshop_core::domain::catalog::{
    Cake, CakeId, CakeName, CakeReadRepository, CakeUpdate, CakeWriteRepository, NewCake,
    services::CakeSlugService,
};
use cakeshop_core::domain::errors::{DomainError, DomainResult};
use cakeshop_core::infrastructure::slug::TransliteratingSlugGenerator;

use support::mocks::InMemoryCakes;

fn create_command(name: &str) -> CreateCakeCommand {
    CreateCakeCommand {
        name: name.into(),
        slug: None,
        description: None,
        price: 450.0,
        image_url: None,
        is_available: true,
        weight: None,
        ingredients: None,
        shelf_life: None,
        category: None,
    }
}

#[tokio::test]
async fn creating_a_cake_derives_a_transliterated_slug() {
    let ctx = support::make_test_context().await;

    let cake = ctx
        .services
        .cake_commands
        .create_cake(create_command("Торт «Наполеон»"))
        .await
        .expect("create failed");

    assert_eq!(cake.slug.as_deref(), Some("napoleon"));
}

#[tokio::test]
async fn duplicate_names_receive_numbered_suffixes() {
    let ctx = support::make_test_context().await;

    let first = ctx
        .services
        .cake_commands
        .create_cake(create_command("Торт"))
        .await
        .expect("create failed");
    let second = ctx
        .services
        .cake_commands
        .create_cake(create_command("Торт"))
        .await
        .expect("create failed");

    assert_eq!(first.slug.as_deref(), Some("cake"));
    assert_eq!(second.slug.as_deref(), Some("cake-1"));
}

#[tokio::test]
async fn explicit_slug_is_kept_verbatim_when_free_and_rejected_when_taken() {
    let ctx = support::make_test_context().await;

    let mut command = create_command("Медовик");
    command.slug = Some("special-offer".into());
    let cake = ctx
        .services
        .cake_commands
        .create_cake(command)
        .await
        .expect("create failed");
    assert_eq!(cake.slug.as_deref(), Some("special-offer"));

    let mut duplicate = create_command("Інший");
    duplicate.slug = Some("special-offer".into());
    let result = ctx.services.cake_commands.create_cake(duplicate).await;
    assert!(matches!(result, Err(ApplicationError::Conflict(_))));
}

#[tokio::test]
async fn renaming_a_cake_never_recomputes_its_slug() {
    let ctx = support::make_test_context().await;

    let cake = ctx
        .services
        .cake_commands
        .create_cake(create_command("Медовик"))
        .await
        .expect("create failed");
    assert_eq!(cake.slug.as_deref(), Some("medovyk"));

    let renamed = ctx
        .services
        .cake_commands
        .update_cake(UpdateCakeCommand {
            id: cake.id,
            name: Some("Медовик святковий".into()),
            slug: None,
            description: None,
            price: None,
            image_url: None,
            is_available: None,
            weight: None,
            ingredients: None,
            shelf_life: None,
            category: None,
        })
        .await
        .expect("update failed");

    assert_eq!(renamed.name, "Медовик святковий");
    assert_eq!(renamed.slug.as_deref(), Some("medovyk"));
}

#[tokio::test]
async fn backfill_slugs_only_unslugged_rows_and_twice_changes_nothing() {
    let ctx = support::make_test_context().await;
    ctx.cakes.seed("Торт «Наполеон»", 520.0, None, None);
    ctx.cakes.seed("Медовик", 450.0, Some("medovyk"), None);
    let bare = ctx.cakes.seed("Торт", 400.0, None, None);

    let assigned = ctx
        .services
        .cake_commands
        .backfill_slugs()
        .await
        .expect("backfill failed");
    assert_eq!(assigned, 2);
    assert_eq!(
        ctx.cakes.get(bare).unwrap().slug.map(String::from),
        Some("cake".to_string())
    );

    let again = ctx
        .services
        .cake_commands
        .backfill_slugs()
        .await
        .expect("second backfill failed");
    assert_eq!(again, 0);
    assert_eq!(
        ctx.cakes.get(bare).unwrap().slug.map(String::from),
        Some("cake".to_string())
    );
}

#[tokio::test]
async fn uniqueness_probe_ignores_the_item_itself() {
    let cakes = Arc::new(InMemoryCakes::new());
    let id = cakes.seed("Наполеон", 520.0, Some("napoleon"), None);
    let service = CakeSlugService::new(
        Arc::clone(&cakes) as Arc<dyn CakeReadRepository>,
        Arc::new(TransliteratingSlugGenerator),
    );

    let slug = service
        .generate_unique_slug(
            &CakeName::new("Наполеон").unwrap(),
            None,
            Some(CakeId::new(id).unwrap()),
        )
        .await
        .expect("slug generation failed");

    // Re-running over an already-slugged row resolves to its own slug, not
    // to "napoleon-1".
    assert_eq!(slug.as_str(), "napoleon");
}

/// Write repository that reports a uniqueness conflict a few times before
/// letting the update through, the way a concurrent backfill would.
struct FlakyWrites {
    inner: Arc<InMemoryCakes>,
    conflicts_left: AtomicU32,
}

#[async_trait]
impl CakeWriteRepository for FlakyWrites {
    async fn insert(&self, cake: NewCake) -> DomainResult<Cake> {
        self.inner.insert(cake).await
    }

    async fn update(&self, update: CakeUpdate) -> DomainResult<Cake> {
        if self
            .conflicts_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            })
            .is_ok()
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        self.inner.update(update).await
    }
}

#[tokio::test]
async fn backfill_retries_the_probe_on_a_uniqueness_conflict() {
    let cakes = Arc::new(InMemoryCakes::new());
    let id = cakes.seed("Медовик", 450.0, None, None);

    let flaky = Arc::new(FlakyWrites {
        inner: Arc::clone(&cakes),
        conflicts_left: AtomicU32::new(2),
    });
    let slug_service = Arc::new(CakeSlugService::new(
        Arc::clone(&cakes) as Arc<dyn CakeReadRepository>,
        Arc::new(TransliteratingSlugGenerator) as Arc<dyn SlugGenerator>,
    ));
    let service = CakeCommandService::new(
        flaky,
        Arc::clone(&cakes) as Arc<dyn CakeReadRepository>,
        slug_service,
    );

    let assigned = service.backfill_slugs().await.expect("backfill failed");
    assert_eq!(assigned, 1);
    assert_eq!(
        cakes.get(id).unwrap().slug.map(String::from),
        Some("medovyk".to_string())
    );
}
