//! One-shot slug backfill for catalog rows that predate slugs.
//!
//! Safe to re-run: rows that already carry a slug are left untouched.

use anyhow::Result;
use cakeshop_core::application::commands::cakes::CakeCommandService;
use cakeshop_core::application::ports::util::SlugGenerator;
use cakeshop_core::config::AppConfig;
use cakeshop_core::domain::catalog::{
    CakeReadRepository, CakeWriteRepository, services::CakeSlugService,
};
use cakeshop_core::infrastructure::{
    database,
    repositories::{SqliteCakeReadRepository, SqliteCakeWriteRepository},
    slug::TransliteratingSlugGenerator,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".to_string()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let write_repo: Arc<dyn CakeWriteRepository> =
        Arc::new(SqliteCakeWriteRepository::new(Arc::clone(&pool)));
    let read_repo: Arc<dyn CakeReadRepository> =
        Arc::new(SqliteCakeReadRepository::new(Arc::clone(&pool)));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TransliteratingSlugGenerator);
    let slug_service = Arc::new(CakeSlugService::new(Arc::clone(&read_repo), slugger));

    let service = CakeCommandService::new(write_repo, read_repo, slug_service);
    let assigned = service.backfill_slugs().await?;

    tracing::info!(assigned, "slug backfill finished");
    Ok(())
}
