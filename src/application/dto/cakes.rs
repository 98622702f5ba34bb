use crate::domain::catalog::Cake;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CakeDto {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub weight: Option<f64>,
    pub ingredients: Option<String>,
    pub shelf_life: Option<String>,
    pub category: Option<String>,
}

impl From<Cake> for CakeDto {
    fn from(cake: Cake) -> Self {
        Self {
            id: cake.id.into(),
            name: cake.name.into(),
            slug: cake.slug.map(Into::into),
            description: cake.description,
            price: cake.price,
            image_url: cake.image_url,
            is_available: cake.is_available,
            weight: cake.weight,
            ingredients: cake.ingredients,
            shelf_life: cake.shelf_life,
            category: cake.category,
        }
    }
}
