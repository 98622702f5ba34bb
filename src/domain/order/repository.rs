use crate::domain::errors::DomainResult;
use crate::domain::order::entity::{NewOrder, NewOrderItem, Order, OrderItem, ResolvedOrder};
use crate::domain::order::value_objects::{OrderId, OrderStatus};
use async_trait::async_trait;

#[async_trait]
pub trait OrderWriteRepository: Send + Sync {
    /// Persist the order and all of its items in a single transaction: the
    /// aggregate becomes visible to readers whole or not at all.
    async fn insert(
        &self,
        order: NewOrder,
        items: Vec<NewOrderItem>,
    ) -> DomainResult<(Order, Vec<OrderItem>)>;

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> DomainResult<Order>;
}

#[async_trait]
pub trait OrderReadRepository: Send + Sync {
    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<ResolvedOrder>>;

    /// Newest first, optionally filtered by exact status tag.
    async fn list(
        &self,
        status: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<ResolvedOrder>>;
}
