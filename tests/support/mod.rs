// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use axum::Router;
use chrono::{TimeZone, Utc};

use cakeshop_core::application::ports::{
    identity::IdentityContext, notification::NotificationSink, time::Clock, util::SlugGenerator,
};
use cakeshop_core::application::services::ApplicationServices;
use cakeshop_core::domain::catalog::{CakeReadRepository, CakeWriteRepository};
use cakeshop_core::domain::notification::NotificationSettingsRepository;
use cakeshop_core::domain::order::{OrderReadRepository, OrderWriteRepository};
use cakeshop_core::infrastructure::slug::TransliteratingSlugGenerator;
use cakeshop_core::presentation::http::{routes::build_router, state::HttpState};

use mocks::{InMemoryCakes, InMemoryOrders, InMemorySettings, RecordingNotifier, StaticTokenIdentity};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_USER_ID: i64 = 1;

pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub cakes: Arc<InMemoryCakes>,
    pub orders: Arc<InMemoryOrders>,
    pub notifier: Arc<RecordingNotifier>,
    pub settings: Arc<InMemorySettings>,
}

impl TestContext {
    pub fn router(&self) -> Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }
}

pub async fn make_test_context() -> TestContext {
    let cakes = Arc::new(InMemoryCakes::new());
    let orders = Arc::new(InMemoryOrders::new(Arc::clone(&cakes)));
    let notifier = Arc::new(RecordingNotifier::new());
    let settings = Arc::new(InMemorySettings::new());

    settings
        .ensure_default()
        .await
        .expect("settings bootstrap failed");

    let cake_write: Arc<dyn CakeWriteRepository> = Arc::clone(&cakes) as _;
    let cake_read: Arc<dyn CakeReadRepository> = Arc::clone(&cakes) as _;
    let order_write: Arc<dyn OrderWriteRepository> = Arc::clone(&orders) as _;
    let order_read: Arc<dyn OrderReadRepository> = Arc::clone(&orders) as _;
    let settings_repo: Arc<dyn NotificationSettingsRepository> = Arc::clone(&settings) as _;
    let sink: Arc<dyn NotificationSink> = Arc::clone(&notifier) as _;
    let identity: Arc<dyn IdentityContext> =
        Arc::new(StaticTokenIdentity::new(TEST_TOKEN, TEST_USER_ID));
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock::new(
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    ));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TransliteratingSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        cake_write,
        cake_read,
        order_write,
        order_read,
        settings_repo,
        sink,
        identity,
        clock,
        slugger,
    ));

    TestContext {
        services,
        cakes,
        orders,
        notifier,
        settings,
    }
}
