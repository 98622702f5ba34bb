use super::error::map_sqlx;
use crate::domain::catalog::{
    Cake, CakeId, CakeName, CakeReadRepository, CakeSlug, CakeUpdate, CakeWriteRepository, NewCake,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const CAKE_COLUMNS: &str = "id, name, description, price, image_url, is_available, weight, ingredients, shelf_life, category, slug";

#[derive(Clone)]
pub struct SqliteCakeWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCakeWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCakeReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCakeReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CakeRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    image_url: Option<String>,
    is_available: i64,
    weight: Option<f64>,
    ingredients: Option<String>,
    shelf_life: Option<String>,
    category: Option<String>,
    slug: Option<String>,
}

impl TryFrom<CakeRow> for Cake {
    type Error = DomainError;

    fn try_from(row: CakeRow) -> Result<Self, Self::Error> {
        Ok(Cake {
            id: CakeId::new(row.id)?,
            name: CakeName::new(row.name)?,
            slug: row.slug.map(CakeSlug::new).transpose()?,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            is_available: row.is_available != 0,
            weight: row.weight,
            ingredients: row.ingredients,
            shelf_life: row.shelf_life,
            category: row.category,
        })
    }
}

#[async_trait]
impl CakeWriteRepository for SqliteCakeWriteRepository {
    async fn insert(&self, cake: NewCake) -> DomainResult<Cake> {
        let NewCake {
            name,
            slug,
            description,
            price,
            image_url,
            is_available,
            weight,
            ingredients,
            shelf_life,
            category,
        } = cake;

        let row = sqlx::query_as::<_, CakeRow>(
            "INSERT INTO cakes (name, description, price, image_url, is_available, weight, ingredients, shelf_life, category, slug) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, name, description, price, image_url, is_available, weight, ingredients, shelf_life, category, slug",
        )
        .bind(name.as_str())
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(if is_available { 1_i64 } else { 0_i64 })
        .bind(weight)
        .bind(ingredients)
        .bind(shelf_life)
        .bind(category)
        .bind(slug.as_ref().map(CakeSlug::as_str))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Cake::try_from(row)
    }

    async fn update(&self, update: CakeUpdate) -> DomainResult<Cake> {
        let CakeUpdate {
            id,
            name,
            slug,
            description,
            price,
            image_url,
            is_available,
            weight,
            ingredients,
            shelf_life,
            category,
        } = update;

        let row = sqlx::query_as::<_, CakeRow>(
            "UPDATE cakes SET \
               name = COALESCE(?, name), \
               slug = COALESCE(?, slug), \
               description = COALESCE(?, description), \
               price = COALESCE(?, price), \
               image_url = COALESCE(?, image_url), \
               is_available = COALESCE(?, is_available), \
               weight = COALESCE(?, weight), \
               ingredients = COALESCE(?, ingredients), \
               shelf_life = COALESCE(?, shelf_life), \
               category = COALESCE(?, category) \
             WHERE id = ? \
             RETURNING id, name, description, price, image_url, is_available, weight, ingredients, shelf_life, category, slug",
        )
        .bind(name.as_ref().map(CakeName::as_str))
        .bind(slug.as_ref().map(CakeSlug::as_str))
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(is_available.map(|flag| if flag { 1_i64 } else { 0_i64 }))
        .bind(weight)
        .bind(ingredients)
        .bind(shelf_life)
        .bind(category)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("cake not found".into()))?;

        Cake::try_from(row)
    }
}

#[async_trait]
impl CakeReadRepository for SqliteCakeReadRepository {
    async fn find_by_id(&self, id: CakeId) -> DomainResult<Option<Cake>> {
        let row = sqlx::query_as::<_, CakeRow>(&format!(
            "SELECT {CAKE_COLUMNS} FROM cakes WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Cake::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CakeSlug) -> DomainResult<Option<Cake>> {
        let row = sqlx::query_as::<_, CakeRow>(&format!(
            "SELECT {CAKE_COLUMNS} FROM cakes WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Cake::try_from).transpose()
    }

    async fn list(&self, limit: u32, offset: u32) -> DomainResult<Vec<Cake>> {
        let rows = sqlx::query_as::<_, CakeRow>(&format!(
            "SELECT {CAKE_COLUMNS} FROM cakes ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Cake::try_from).collect()
    }
}
