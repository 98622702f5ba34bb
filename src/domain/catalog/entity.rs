// src/domain/catalog/entity.rs
use crate::domain::catalog::value_objects::{CakeId, CakeName, CakeSlug};

/// A purchasable catalog item.
///
/// `slug` stays `None` for legacy rows until the backfill migration assigns
/// one; after that it only changes when an owner sets it explicitly.
#[derive(Debug, Clone)]
pub struct Cake {
    pub id: CakeId,
    pub name: CakeName,
    pub slug: Option<CakeSlug>,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub weight: Option<f64>,
    pub ingredients: Option<String>,
    pub shelf_life: Option<String>,
    pub category: Option<String>,
}

impl Cake {
    pub fn set_slug(&mut self, slug: CakeSlug) {
        self.slug = Some(slug);
    }
}

#[derive(Debug, Clone)]
pub struct NewCake {
    pub name: CakeName,
    pub slug: Option<CakeSlug>,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub weight: Option<f64>,
    pub ingredients: Option<String>,
    pub shelf_life: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CakeUpdate {
    pub id: CakeId,
    pub name: Option<CakeName>,
    pub slug: Option<CakeSlug>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub weight: Option<f64>,
    pub ingredients: Option<String>,
    pub shelf_life: Option<String>,
    pub category: Option<String>,
}

impl CakeUpdate {
    pub fn new(id: CakeId) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            price: None,
            image_url: None,
            is_available: None,
            weight: None,
            ingredients: None,
            shelf_life: None,
            category: None,
        }
    }

    pub fn with_name(mut self, name: CakeName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: CakeSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}
