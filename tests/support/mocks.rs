// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use cakeshop_core::application::error::{ApplicationError, ApplicationResult};
use cakeshop_core::application::ports::identity::IdentityContext;
use cakeshop_core::application::ports::notification::NotificationSink;
use cakeshop_core::application::ports::time::Clock;
use cakeshop_core::domain::catalog::{
    Cake, CakeId, CakeName, CakeReadRepository, CakeSlug, CakeUpdate, CakeWriteRepository, NewCake,
};
use cakeshop_core::domain::errors::{DomainError, DomainResult};
use cakeshop_core::domain::notification::{
    NotificationSettings, NotificationSettingsRepository, NotificationSettingsUpdate,
};
use cakeshop_core::domain::order::{
    NewOrder, NewOrderItem, Order, OrderId, OrderItem, OrderReadRepository, OrderStatus,
    OrderWriteRepository, ResolvedOrder, ResolvedOrderItem, UserId,
};
use std::sync::Arc;

pub struct InMemoryCakes {
    inner: Mutex<HashMap<i64, Cake>>,
    next_id: AtomicI64,
}

impl InMemoryCakes {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a row directly, bypassing the write repository, the way seed
    /// data or legacy rows would exist.
    pub fn seed(&self, name: &str, price: f64, slug: Option<&str>, category: Option<&str>) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let cake = Cake {
            id: CakeId::new(id).unwrap(),
            name: CakeName::new(name).unwrap(),
            slug: slug.map(|s| CakeSlug::new(s).unwrap()),
            description: None,
            price,
            image_url: None,
            is_available: true,
            weight: None,
            ingredients: None,
            shelf_life: None,
            category: category.map(str::to_string),
        };
        self.inner.lock().unwrap().insert(id, cake);
        id
    }

    pub fn get(&self, id: i64) -> Option<Cake> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    fn slug_taken_by_other(map: &HashMap<i64, Cake>, slug: &CakeSlug, own_id: Option<i64>) -> bool {
        map.values().any(|cake| {
            cake.slug.as_ref() == Some(slug) && Some(i64::from(cake.id)) != own_id
        })
    }
}

#[async_trait]
impl CakeReadRepository for InMemoryCakes {
    async fn find_by_id(&self, id: CakeId) -> DomainResult<Option<Cake>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &CakeSlug) -> DomainResult<Option<Cake>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|cake| cake.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self, limit: u32, offset: u32) -> DomainResult<Vec<Cake>> {
        let map = self.inner.lock().unwrap();
        let mut cakes: Vec<Cake> = map.values().cloned().collect();
        cakes.sort_by_key(|cake| i64::from(cake.id));
        Ok(cakes
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[async_trait]
impl CakeWriteRepository for InMemoryCakes {
    async fn insert(&self, cake: NewCake) -> DomainResult<Cake> {
        let mut map = self.inner.lock().unwrap();
        if let Some(slug) = &cake.slug {
            if Self::slug_taken_by_other(&map, slug, None) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Cake {
            id: CakeId::new(id)?,
            name: cake.name,
            slug: cake.slug,
            description: cake.description,
            price: cake.price,
            image_url: cake.image_url,
            is_available: cake.is_available,
            weight: cake.weight,
            ingredients: cake.ingredients,
            shelf_life: cake.shelf_life,
            category: cake.category,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CakeUpdate) -> DomainResult<Cake> {
        let mut map = self.inner.lock().unwrap();
        let id = i64::from(update.id);
        if let Some(slug) = &update.slug {
            if Self::slug_taken_by_other(&map, slug, Some(id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let cake = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("cake not found".into()))?;

        if let Some(name) = update.name {
            cake.name = name;
        }
        if let Some(slug) = update.slug {
            cake.slug = Some(slug);
        }
        if let Some(description) = update.description {
            cake.description = Some(description);
        }
        if let Some(price) = update.price {
            cake.price = price;
        }
        if let Some(image_url) = update.image_url {
            cake.image_url = Some(image_url);
        }
        if let Some(is_available) = update.is_available {
            cake.is_available = is_available;
        }
        if let Some(weight) = update.weight {
            cake.weight = Some(weight);
        }
        if let Some(ingredients) = update.ingredients {
            cake.ingredients = Some(ingredients);
        }
        if let Some(shelf_life) = update.shelf_life {
            cake.shelf_life = Some(shelf_life);
        }
        if let Some(category) = update.category {
            cake.category = Some(category);
        }

        Ok(cake.clone())
    }
}

pub struct InMemoryOrders {
    cakes: Arc<InMemoryCakes>,
    inner: Mutex<HashMap<i64, (Order, Vec<OrderItem>)>>,
    next_order_id: AtomicI64,
    next_item_id: AtomicI64,
}

impl InMemoryOrders {
    pub fn new(cakes: Arc<InMemoryCakes>) -> Self {
        Self {
            cakes,
            inner: Mutex::new(HashMap::new()),
            next_order_id: AtomicI64::new(1),
            next_item_id: AtomicI64::new(1),
        }
    }

    pub fn order_count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn item_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap()
            .values()
            .map(|(_, items)| items.len())
            .sum()
    }

    fn resolve(&self, order: Order, items: Vec<OrderItem>) -> ResolvedOrder {
        let items = items
            .into_iter()
            .map(|item| {
                let cake = self.cakes.get(i64::from(item.cake_id));
                ResolvedOrderItem { item, cake }
            })
            .collect();
        ResolvedOrder { order, items }
    }
}

#[async_trait]
impl OrderWriteRepository for InMemoryOrders {
    async fn insert(
        &self,
        order: NewOrder,
        items: Vec<NewOrderItem>,
    ) -> DomainResult<(Order, Vec<OrderItem>)> {
        let mut map = self.inner.lock().unwrap();
        let order_id = OrderId::new(self.next_order_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Order {
            id: order_id,
            user_id: order.user_id,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            delivery_method: order.delivery_method,
            delivery_date: order.delivery_date,
            total_price: order.total_price,
            status: order.status,
            created_at: order.created_at,
        };
        let stored_items: Vec<OrderItem> = items
            .into_iter()
            .map(|item| OrderItem {
                id: self.next_item_id.fetch_add(1, Ordering::SeqCst),
                order_id,
                cake_id: item.cake_id,
                quantity: item.quantity,
                flavor: item.flavor,
                weight: item.weight,
            })
            .collect();
        map.insert(i64::from(order_id), (stored.clone(), stored_items.clone()));
        Ok((stored, stored_items))
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> DomainResult<Order> {
        let mut map = self.inner.lock().unwrap();
        let (order, _) = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("order not found".into()))?;
        order.status = status;
        Ok(order.clone())
    }
}

#[async_trait]
impl OrderReadRepository for InMemoryOrders {
    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<ResolvedOrder>> {
        let entry = self.inner.lock().unwrap().get(&i64::from(id)).cloned();
        Ok(entry.map(|(order, items)| self.resolve(order, items)))
    }

    async fn list(
        &self,
        status: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<ResolvedOrder>> {
        let mut entries: Vec<(Order, Vec<OrderItem>)> = {
            let map = self.inner.lock().unwrap();
            map.values()
                .filter(|(order, _)| status.is_none_or(|tag| order.status.as_str() == tag))
                .cloned()
                .collect()
        };
        entries.sort_by(|(a, _), (b, _)| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(entries
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|(order, items)| self.resolve(order, items))
            .collect())
    }
}

/// Captures every message handed to the sink; flips to failure on demand.
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn fail_next_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingNotifier {
    async fn send(&self, text: &str) -> ApplicationResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("sink unavailable"));
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct InMemorySettings {
    inner: Mutex<Option<NotificationSettings>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }
}

#[async_trait]
impl NotificationSettingsRepository for InMemorySettings {
    async fn ensure_default(&self) -> DomainResult<NotificationSettings> {
        let mut slot = self.inner.lock().unwrap();
        if slot.is_none() {
            *slot = Some(NotificationSettings::default());
        }
        Ok(slot.clone().unwrap())
    }

    async fn get(&self) -> DomainResult<Option<NotificationSettings>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn update(
        &self,
        update: NotificationSettingsUpdate,
    ) -> DomainResult<NotificationSettings> {
        let mut slot = self.inner.lock().unwrap();
        let settings = slot
            .as_mut()
            .ok_or_else(|| DomainError::NotFound("notification settings not initialised".into()))?;

        if let Some(bot_token) = update.bot_token {
            settings.bot_token = Some(bot_token);
        }
        if let Some(chat_id_1) = update.chat_id_1 {
            settings.chat_id_1 = Some(chat_id_1);
        }
        if let Some(label_1) = update.label_1 {
            settings.label_1 = Some(label_1);
        }
        if let Some(is_active_1) = update.is_active_1 {
            settings.is_active_1 = is_active_1;
        }
        if let Some(chat_id_2) = update.chat_id_2 {
            settings.chat_id_2 = Some(chat_id_2);
        }
        if let Some(label_2) = update.label_2 {
            settings.label_2 = Some(label_2);
        }
        if let Some(is_active_2) = update.is_active_2 {
            settings.is_active_2 = is_active_2;
        }
        if let Some(chat_id_3) = update.chat_id_3 {
            settings.chat_id_3 = Some(chat_id_3);
        }
        if let Some(label_3) = update.label_3 {
            settings.label_3 = Some(label_3);
        }
        if let Some(is_active_3) = update.is_active_3 {
            settings.is_active_3 = is_active_3;
        }
        if let Some(is_active) = update.is_active {
            settings.is_active = is_active;
        }

        Ok(settings.clone())
    }
}

pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Resolves one well-known token to one user; everything else is a guest.
pub struct StaticTokenIdentity {
    token: String,
    user_id: i64,
}

impl StaticTokenIdentity {
    pub fn new(token: impl Into<String>, user_id: i64) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }
}

#[async_trait]
impl IdentityContext for StaticTokenIdentity {
    async fn resolve(&self, token: &str) -> ApplicationResult<Option<UserId>> {
        if token == self.token {
            Ok(Some(UserId::new(self.user_id).unwrap()))
        } else {
            Ok(None)
        }
    }
}
