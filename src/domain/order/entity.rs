// src/domain/order/entity.rs
use crate::domain::catalog::entity::Cake;
use crate::domain::catalog::value_objects::CakeId;
use crate::domain::order::value_objects::{OrderId, OrderStatus, Quantity, UserId};
use chrono::{DateTime, Utc};

/// A persisted order. `total_price` is fixed at intake time from the catalog
/// prices in effect then; later catalog price changes never touch it.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub user_id: Option<UserId>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub delivery_method: Option<String>,
    pub delivery_date: Option<String>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// A persisted line item. Lives and dies with its parent order.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: OrderId,
    pub cake_id: CakeId,
    pub quantity: Quantity,
    pub flavor: Option<String>,
    /// Customer-selected weight in kg. Stored verbatim; it does not affect
    /// the price.
    pub weight: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<UserId>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub delivery_method: Option<String>,
    pub delivery_date: Option<String>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub cake_id: CakeId,
    pub quantity: Quantity,
    pub flavor: Option<String>,
    pub weight: Option<f64>,
}

/// An order item together with its catalog item. The cake is a weak
/// reference; readers tolerate a row that predates the catalog.
#[derive(Debug, Clone)]
pub struct ResolvedOrderItem {
    pub item: OrderItem,
    pub cake: Option<Cake>,
}

/// An order with its items fully resolved, exactly as committed.
#[derive(Debug, Clone)]
pub struct ResolvedOrder {
    pub order: Order,
    pub items: Vec<ResolvedOrderItem>,
}
