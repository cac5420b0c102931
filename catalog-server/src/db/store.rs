//! Storage seam for the catalog
//!
//! The query layer talks to a `CatalogStore` handle that is constructed once
//! at startup and injected into the router state. Postgres backs it in
//! production; the in-memory store backs tests and database-less runs.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Category, CategoryName, NewProduct, Pagination, Product, ProductWithCategory};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} '{id}' is referenced but does not exist")]
    MissingReference { resource: &'static str, id: String },
}

/// Which products a list or count covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Restrict to products referencing this category
    pub category: Option<Uuid>,
}

impl ProductFilter {
    /// Every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Products referencing `category`.
    pub fn in_category(category: Uuid) -> Self {
        Self {
            category: Some(category),
        }
    }

    pub(crate) fn matches(&self, product: &Product) -> bool {
        self.category.map_or(true, |id| product.category == id)
    }
}

/// Persistence operations the catalog needs.
///
/// All lists come back in insertion order.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every category.
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    /// First category (by insertion order) whose name matches exactly.
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, DbError>;

    /// Whether a category with this id exists.
    async fn category_exists(&self, id: Uuid) -> Result<bool, DbError>;

    /// Persist a new category with a generated id.
    async fn insert_category(&self, name: &CategoryName) -> Result<Category, DbError>;

    /// Products matching `filter`; `None` pagination returns every match.
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: Option<Pagination>,
    ) -> Result<Vec<Product>, DbError>;

    /// Number of products matching `filter`, ignoring pagination.
    async fn count_products(&self, filter: ProductFilter) -> Result<u64, DbError>;

    /// Single product with its category expanded.
    async fn find_product(&self, id: Uuid) -> Result<Option<ProductWithCategory>, DbError>;

    /// Persist a new product with a generated id.
    async fn insert_product(&self, product: &NewProduct) -> Result<Product, DbError>;
}
