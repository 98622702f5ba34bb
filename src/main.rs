use anyhow::Result;
use cakeshop_core::application::{
    ports::{
        identity::IdentityContext, notification::NotificationSink, time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use cakeshop_core::config::AppConfig;
use cakeshop_core::domain::{
    catalog::{CakeReadRepository, CakeWriteRepository},
    notification::NotificationSettingsRepository,
    order::{OrderReadRepository, OrderWriteRepository},
};
use cakeshop_core::infrastructure::{
    database,
    identity::GuestIdentity,
    notification::TelegramNotifier,
    repositories::{
        SqliteCakeReadRepository, SqliteCakeWriteRepository, SqliteNotificationSettingsRepository,
        SqliteOrderReadRepository, SqliteOrderWriteRepository,
    },
    slug::TransliteratingSlugGenerator,
    time::SystemClock,
};
use cakeshop_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let cake_write_repo: Arc<dyn CakeWriteRepository> =
        Arc::new(SqliteCakeWriteRepository::new(Arc::clone(&pool)));
    let cake_read_repo: Arc<dyn CakeReadRepository> =
        Arc::new(SqliteCakeReadRepository::new(Arc::clone(&pool)));
    let order_write_repo: Arc<dyn OrderWriteRepository> =
        Arc::new(SqliteOrderWriteRepository::new(Arc::clone(&pool)));
    let order_read_repo: Arc<dyn OrderReadRepository> =
        Arc::new(SqliteOrderReadRepository::new(Arc::clone(&pool)));
    let settings_repo: Arc<dyn NotificationSettingsRepository> =
        Arc::new(SqliteNotificationSettingsRepository::new(Arc::clone(&pool)));

    // The settings singleton is created here, on purpose, not as a side
    // effect of the first read.
    settings_repo.ensure_default().await?;

    let notifier: Arc<dyn NotificationSink> = Arc::new(TelegramNotifier::new(
        Arc::clone(&settings_repo),
        config.notify_timeout(),
    )?);
    let identity: Arc<dyn IdentityContext> = Arc::new(GuestIdentity);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TransliteratingSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        cake_write_repo,
        cake_read_repo,
        order_write_repo,
        order_read_repo,
        settings_repo,
        notifier,
        identity,
        clock,
        slugger,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
