use crate::application::dto::CakeDto;
use crate::domain::order::{ResolvedOrder, ResolvedOrderItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: i64,
    pub order_id: i64,
    pub cake_id: i64,
    pub quantity: i64,
    pub flavor: Option<String>,
    pub weight: Option<f64>,
    pub cake: Option<CakeDto>,
}

impl From<ResolvedOrderItem> for OrderItemDto {
    fn from(line: ResolvedOrderItem) -> Self {
        Self {
            id: line.item.id,
            order_id: line.item.order_id.into(),
            cake_id: line.item.cake_id.into(),
            quantity: line.item.quantity.into(),
            flavor: line.item.flavor,
            weight: line.item.weight,
            cake: line.cake.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i64,
    pub user_id: Option<i64>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub delivery_method: Option<String>,
    pub delivery_date: Option<String>,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDto>,
}

impl From<ResolvedOrder> for OrderDto {
    fn from(resolved: ResolvedOrder) -> Self {
        let order = resolved.order;
        Self {
            id: order.id.into(),
            user_id: order.user_id.map(Into::into),
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            delivery_method: order.delivery_method,
            delivery_date: order.delivery_date,
            total_price: order.total_price,
            status: order.status.into(),
            created_at: order.created_at,
            items: resolved.items.into_iter().map(Into::into).collect(),
        }
    }
}
