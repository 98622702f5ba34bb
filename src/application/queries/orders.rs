// src/application/queries/orders.rs
use crate::{
    application::{
        dto::OrderDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::order::{OrderId, OrderReadRepository},
};
use std::sync::Arc;

pub struct ListOrdersQuery {
    /// Exact status tag to filter by; `None` lists everything.
    pub status: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

pub struct OrderQueryService {
    read_repo: Arc<dyn OrderReadRepository>,
}

impl OrderQueryService {
    pub fn new(read_repo: Arc<dyn OrderReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_orders(&self, query: ListOrdersQuery) -> ApplicationResult<Vec<OrderDto>> {
        let limit = super::cakes::normalize_limit(query.limit);
        let orders = self
            .read_repo
            .list(query.status.as_deref(), limit, query.offset)
            .await?;
        Ok(orders.into_iter().map(Into::into).collect())
    }

    pub async fn get_order_by_id(&self, id: i64) -> ApplicationResult<OrderDto> {
        let id = OrderId::new(id)?;
        let order = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("order not found"))?;
        Ok(order.into())
    }
}
