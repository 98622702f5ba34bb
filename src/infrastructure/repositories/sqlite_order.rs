use super::error::map_sqlx;
use crate::domain::catalog::{Cake, CakeId, CakeName, CakeSlug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::order::{
    NewOrder, NewOrderItem, Order, OrderId, OrderItem, OrderReadRepository, OrderStatus,
    OrderWriteRepository, Quantity, ResolvedOrder, ResolvedOrderItem, UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ORDER_COLUMNS: &str = "id, user_id, customer_name, customer_phone, delivery_method, delivery_date, total_price, status, created_at";

#[derive(Clone)]
pub struct SqliteOrderWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteOrderWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteOrderReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteOrderReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    user_id: Option<i64>,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    delivery_method: Option<String>,
    delivery_date: Option<String>,
    total_price: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: OrderId::new(row.id)?,
            user_id: row.user_id.map(UserId::new).transpose()?,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            delivery_method: row.delivery_method,
            delivery_date: row.delivery_date,
            total_price: row.total_price,
            status: OrderStatus::new(row.status)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    cake_id: i64,
    quantity: i64,
    flavor: Option<String>,
    weight: Option<f64>,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = DomainError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        Ok(OrderItem {
            id: row.id,
            order_id: OrderId::new(row.order_id)?,
            cake_id: CakeId::new(row.cake_id)?,
            quantity: Quantity::new(row.quantity)?,
            flavor: row.flavor,
            weight: row.weight,
        })
    }
}

/// Line item joined with its (possibly missing) cake row.
#[derive(Debug, FromRow)]
struct OrderLineRow {
    id: i64,
    order_id: i64,
    cake_id: i64,
    quantity: i64,
    flavor: Option<String>,
    weight: Option<f64>,
    c_id: Option<i64>,
    c_name: Option<String>,
    c_description: Option<String>,
    c_price: Option<f64>,
    c_image_url: Option<String>,
    c_is_available: Option<i64>,
    c_weight: Option<f64>,
    c_ingredients: Option<String>,
    c_shelf_life: Option<String>,
    c_category: Option<String>,
    c_slug: Option<String>,
}

impl TryFrom<OrderLineRow> for ResolvedOrderItem {
    type Error = DomainError;

    fn try_from(row: OrderLineRow) -> Result<Self, Self::Error> {
        let item = OrderItem {
            id: row.id,
            order_id: OrderId::new(row.order_id)?,
            cake_id: CakeId::new(row.cake_id)?,
            quantity: Quantity::new(row.quantity)?,
            flavor: row.flavor,
            weight: row.weight,
        };
        let cake = match (row.c_id, row.c_name, row.c_price) {
            (Some(id), Some(name), Some(price)) => Some(Cake {
                id: CakeId::new(id)?,
                name: CakeName::new(name)?,
                slug: row.c_slug.map(CakeSlug::new).transpose()?,
                description: row.c_description,
                price,
                image_url: row.c_image_url,
                is_available: row.c_is_available.unwrap_or(0) != 0,
                weight: row.c_weight,
                ingredients: row.c_ingredients,
                shelf_life: row.c_shelf_life,
                category: row.c_category,
            }),
            _ => None,
        };
        Ok(ResolvedOrderItem { item, cake })
    }
}

#[async_trait]
impl OrderWriteRepository for SqliteOrderWriteRepository {
    async fn insert(
        &self,
        order: NewOrder,
        items: Vec<NewOrderItem>,
    ) -> DomainResult<(Order, Vec<OrderItem>)> {
        let NewOrder {
            user_id,
            customer_name,
            customer_phone,
            delivery_method,
            delivery_date,
            total_price,
            status,
            created_at,
        } = order;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let order_row = sqlx::query_as::<_, OrderRow>(
            "INSERT INTO orders (user_id, customer_name, customer_phone, delivery_method, delivery_date, total_price, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, user_id, customer_name, customer_phone, delivery_method, delivery_date, total_price, status, created_at",
        )
        .bind(user_id.map(i64::from))
        .bind(customer_name)
        .bind(customer_phone)
        .bind(delivery_method)
        .bind(delivery_date)
        .bind(total_price)
        .bind(status.as_str())
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let order = Order::try_from(order_row)?;

        let mut persisted_items = Vec::with_capacity(items.len());
        for item in items {
            let item_row = sqlx::query_as::<_, OrderItemRow>(
                "INSERT INTO order_items (order_id, cake_id, quantity, flavor, weight) \
                 VALUES (?, ?, ?, ?, ?) \
                 RETURNING id, order_id, cake_id, quantity, flavor, weight",
            )
            .bind(i64::from(order.id))
            .bind(i64::from(item.cake_id))
            .bind(i64::from(item.quantity))
            .bind(item.flavor)
            .bind(item.weight)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

            persisted_items.push(OrderItem::try_from(item_row)?);
        }

        tx.commit().await.map_err(map_sqlx)?;

        Ok((order, persisted_items))
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> DomainResult<Order> {
        let row = sqlx::query_as::<_, OrderRow>(
            "UPDATE orders SET status = ? WHERE id = ? \
             RETURNING id, user_id, customer_name, customer_phone, delivery_method, delivery_date, total_price, status, created_at",
        )
        .bind(status.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("order not found".into()))?;

        Order::try_from(row)
    }
}

impl SqliteOrderReadRepository {
    async fn load_items(&self, order_id: OrderId) -> DomainResult<Vec<ResolvedOrderItem>> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            "SELECT oi.id, oi.order_id, oi.cake_id, oi.quantity, oi.flavor, oi.weight, \
                    c.id AS c_id, c.name AS c_name, c.description AS c_description, c.price AS c_price, \
                    c.image_url AS c_image_url, c.is_available AS c_is_available, c.weight AS c_weight, \
                    c.ingredients AS c_ingredients, c.shelf_life AS c_shelf_life, c.category AS c_category, c.slug AS c_slug \
             FROM order_items oi \
             LEFT JOIN cakes c ON c.id = oi.cake_id \
             WHERE oi.order_id = ? \
             ORDER BY oi.id",
        )
        .bind(i64::from(order_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ResolvedOrderItem::try_from).collect()
    }
}

#[async_trait]
impl OrderReadRepository for SqliteOrderReadRepository {
    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<ResolvedOrder>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let order = Order::try_from(row)?;
        let items = self.load_items(order.id).await?;
        Ok(Some(ResolvedOrder { order, items }))
    }

    async fn list(
        &self,
        status: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<ResolvedOrder>> {
        let rows = if let Some(status) = status {
            sqlx::query_as::<_, OrderRow>(&format!(
                "SELECT {ORDER_COLUMNS} FROM orders WHERE status = ? ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
            ))
            .bind(status)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&*self.pool)
            .await
        } else {
            sqlx::query_as::<_, OrderRow>(&format!(
                "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
            ))
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&*self.pool)
            .await
        }
        .map_err(map_sqlx)?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let order = Order::try_from(row)?;
            let items = self.load_items(order.id).await?;
            orders.push(ResolvedOrder { order, items });
        }
        Ok(orders)
    }
}
