// src/application/commands/orders.rs
use crate::{
    application::{
        dto::OrderDto,
        error::{ApplicationError, ApplicationResult},
        ports::{notification::NotificationSink, time::Clock},
    },
    domain::{
        catalog::{Cake, CakeId, CakeReadRepository},
        order::{
            NewOrder, NewOrderItem, OrderId, OrderReadRepository, OrderStatus, OrderWriteRepository,
            Quantity, ResolvedOrder, ResolvedOrderItem, UserId,
        },
    },
};
use std::fmt::Write as _;
use std::sync::Arc;

/// How the intake pipeline treats a submitted line whose cake id does not
/// resolve against the catalog.
///
/// Cart checkout drops the line and keeps going; quick order rejects the
/// whole submission. The asymmetry is inherited behavior — see the intake
/// tests before changing either branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingItemPolicy {
    DropLine,
    Reject,
}

#[derive(Debug, Clone)]
pub struct SubmittedLine {
    pub cake_id: i64,
    pub quantity: i64,
    pub flavor: Option<String>,
    pub weight: Option<f64>,
}

/// Normalized order submission. Both checkout shapes funnel into this one
/// type; the policy tag is the only divergence left between them.
#[derive(Debug, Clone)]
pub struct SubmitOrderCommand {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub delivery_method: Option<String>,
    pub delivery_date: Option<String>,
    pub lines: Vec<SubmittedLine>,
    pub policy: MissingItemPolicy,
}

impl SubmitOrderCommand {
    /// Multi-item cart checkout.
    pub fn cart(
        customer_name: Option<String>,
        customer_phone: Option<String>,
        delivery_method: Option<String>,
        delivery_date: Option<String>,
        lines: Vec<SubmittedLine>,
    ) -> Self {
        Self {
            customer_name,
            customer_phone,
            delivery_method,
            delivery_date,
            lines,
            policy: MissingItemPolicy::DropLine,
        }
    }

    /// Single-item guest quick order.
    pub fn quick(
        customer_name: String,
        customer_phone: String,
        delivery_method: Option<String>,
        delivery_date: Option<String>,
        line: SubmittedLine,
    ) -> Self {
        Self {
            customer_name: Some(customer_name),
            customer_phone: Some(customer_phone),
            delivery_method,
            delivery_date,
            lines: vec![line],
            policy: MissingItemPolicy::Reject,
        }
    }
}

pub struct UpdateOrderStatusCommand {
    pub id: i64,
    pub status: String,
}

pub struct OrderCommandService {
    cake_repo: Arc<dyn CakeReadRepository>,
    write_repo: Arc<dyn OrderWriteRepository>,
    read_repo: Arc<dyn OrderReadRepository>,
    notifier: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
}

impl OrderCommandService {
    pub fn new(
        cake_repo: Arc<dyn CakeReadRepository>,
        write_repo: Arc<dyn OrderWriteRepository>,
        read_repo: Arc<dyn OrderReadRepository>,
        notifier: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cake_repo,
            write_repo,
            read_repo,
            notifier,
            clock,
        }
    }

    /// Turn a submission into a priced, persisted order.
    ///
    /// Unit prices always come from the catalog at resolution time, never
    /// from the client; the submitted weight is stored on the item but does
    /// not enter the price. The order and its items are committed in one
    /// transaction, and the response reflects exactly what was committed.
    pub async fn submit_order(
        &self,
        actor: Option<UserId>,
        command: SubmitOrderCommand,
    ) -> ApplicationResult<OrderDto> {
        if command.policy == MissingItemPolicy::Reject {
            require_customer_contact(&command)?;
        }

        let mut total_price = 0.0_f64;
        let mut resolved: Vec<(Cake, NewOrderItem)> = Vec::new();

        for line in &command.lines {
            let quantity = Quantity::new(line.quantity)?;

            let cake = match CakeId::new(line.cake_id) {
                Ok(id) => self.cake_repo.find_by_id(id).await?,
                Err(_) => None,
            };
            let Some(cake) = cake else {
                match command.policy {
                    MissingItemPolicy::DropLine => {
                        tracing::warn!(cake_id = line.cake_id, "dropping order line: cake not found");
                        continue;
                    }
                    MissingItemPolicy::Reject => {
                        return Err(ApplicationError::not_found("cake not found"));
                    }
                }
            };

            total_price += cake.price * line.quantity as f64;
            let item = NewOrderItem {
                cake_id: cake.id,
                quantity,
                flavor: line.flavor.clone(),
                weight: line.weight,
            };
            resolved.push((cake, item));
        }

        let new_order = NewOrder {
            user_id: actor,
            customer_name: command.customer_name,
            customer_phone: command.customer_phone,
            delivery_method: command.delivery_method,
            delivery_date: command.delivery_date,
            total_price,
            status: OrderStatus::pending(),
            created_at: self.clock.now(),
        };
        let items = resolved.iter().map(|(_, item)| item.clone()).collect();

        let (order, persisted_items) = self.write_repo.insert(new_order, items).await?;

        let order_id = order.id;
        let committed = ResolvedOrder {
            order,
            items: persisted_items
                .into_iter()
                .zip(resolved.into_iter())
                .map(|(item, (cake, _))| ResolvedOrderItem {
                    item,
                    cake: Some(cake),
                })
                .collect(),
        };

        // Best effort: a lost notification never loses the order.
        let summary = format_order_summary(&committed);
        if let Err(err) = self.notifier.send(&summary).await {
            tracing::warn!(
                error = %err,
                order_id = i64::from(order_id),
                "order notification failed"
            );
        }

        Ok(committed.into())
    }

    pub async fn update_order_status(
        &self,
        command: UpdateOrderStatusCommand,
    ) -> ApplicationResult<OrderDto> {
        let id = OrderId::new(command.id)?;
        let status = OrderStatus::new(command.status)?;

        self.write_repo.update_status(id, status).await?;

        let updated = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("order not found"))?;
        Ok(updated.into())
    }
}

fn require_customer_contact(command: &SubmitOrderCommand) -> ApplicationResult<()> {
    let filled = |value: &Option<String>| {
        value
            .as_deref()
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    };
    if !filled(&command.customer_name) || !filled(&command.customer_phone) {
        return Err(ApplicationError::validation(
            "customer name and phone are required",
        ));
    }
    Ok(())
}

/// Operator-facing summary handed to the notification sink after commit.
fn format_order_summary(resolved: &ResolvedOrder) -> String {
    let order = &resolved.order;
    let mut text = format!("🎂 Нове замовлення #{}\n", i64::from(order.id));

    let customer = order.customer_name.as_deref().unwrap_or("—");
    let _ = write!(text, "Клієнт: {customer}");
    if let Some(phone) = order.customer_phone.as_deref() {
        let _ = write!(text, " ({phone})");
    }
    text.push('\n');

    if let Some(method) = order.delivery_method.as_deref() {
        let _ = write!(text, "Доставка: {method}");
        if let Some(date) = order.delivery_date.as_deref() {
            let _ = write!(text, ", {date}");
        }
        text.push('\n');
    }

    text.push_str("Позиції:\n");
    for line in &resolved.items {
        let name = line
            .cake
            .as_ref()
            .map(|cake| cake.name.as_str())
            .unwrap_or("?");
        let _ = write!(text, "  • {} ×{}", name, i64::from(line.item.quantity));
        if let Some(flavor) = line.item.flavor.as_deref() {
            let _ = write!(text, " (начинка: {flavor})");
        }
        if let Some(weight) = line.item.weight {
            let _ = write!(text, " {weight} кг");
        }
        text.push('\n');
    }

    let _ = write!(text, "Разом: {} грн", order.total_price);
    text
}
