// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            cakes::CakeCommandService, orders::OrderCommandService,
            settings::NotificationSettingsService,
        },
        ports::{
            identity::IdentityContext, notification::NotificationSink, time::Clock,
            util::SlugGenerator,
        },
        queries::{cakes::CakeQueryService, orders::OrderQueryService},
    },
    domain::{
        catalog::{CakeReadRepository, CakeWriteRepository, services::CakeSlugService},
        notification::NotificationSettingsRepository,
        order::{OrderReadRepository, OrderWriteRepository},
    },
};

pub struct ApplicationServices {
    pub cake_commands: Arc<CakeCommandService>,
    pub cake_queries: Arc<CakeQueryService>,
    pub order_commands: Arc<OrderCommandService>,
    pub order_queries: Arc<OrderQueryService>,
    pub notification_settings: Arc<NotificationSettingsService>,
    identity: Arc<dyn IdentityContext>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cake_write_repo: Arc<dyn CakeWriteRepository>,
        cake_read_repo: Arc<dyn CakeReadRepository>,
        order_write_repo: Arc<dyn OrderWriteRepository>,
        order_read_repo: Arc<dyn OrderReadRepository>,
        settings_repo: Arc<dyn NotificationSettingsRepository>,
        notifier: Arc<dyn NotificationSink>,
        identity: Arc<dyn IdentityContext>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(CakeSlugService::new(
            Arc::clone(&cake_read_repo),
            Arc::clone(&slugger),
        ));

        let cake_commands = Arc::new(CakeCommandService::new(
            Arc::clone(&cake_write_repo),
            Arc::clone(&cake_read_repo),
            Arc::clone(&slug_service),
        ));
        let cake_queries = Arc::new(CakeQueryService::new(Arc::clone(&cake_read_repo)));

        let order_commands = Arc::new(OrderCommandService::new(
            Arc::clone(&cake_read_repo),
            Arc::clone(&order_write_repo),
            Arc::clone(&order_read_repo),
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));
        let order_queries = Arc::new(OrderQueryService::new(Arc::clone(&order_read_repo)));

        let notification_settings = Arc::new(NotificationSettingsService::new(
            Arc::clone(&settings_repo),
            Arc::clone(&notifier),
        ));

        Self {
            cake_commands,
            cake_queries,
            order_commands,
            order_queries,
            notification_settings,
            identity,
        }
    }

    pub fn identity_context(&self) -> Arc<dyn IdentityContext> {
        Arc::clone(&self.identity)
    }
}
