//! In-memory catalog store
//!
//! Backs the router tests and `catalog serve --memory`. Records live in
//! insertion-ordered vectors behind a single `RwLock`; nothing is persisted.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CatalogStore, DbError, ProductFilter};
use crate::models::{Category, CategoryName, NewProduct, Pagination, Product, ProductWithCategory};

#[derive(Default)]
struct Records {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Records {
    fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Catalog store held entirely in process memory
#[derive(Default)]
pub struct MemoryCatalogStore {
    records: RwLock<Records>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.records.read().await.categories.clone())
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, DbError> {
        let records = self.records.read().await;
        Ok(records.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn category_exists(&self, id: Uuid) -> Result<bool, DbError> {
        Ok(self.records.read().await.category(id).is_some())
    }

    async fn insert_category(&self, name: &CategoryName) -> Result<Category, DbError> {
        let category = Category {
            id: Uuid::new_v4(),
            name: name.as_str().to_owned(),
            created_at: Utc::now(),
        };

        self.records.write().await.categories.push(category.clone());
        Ok(category)
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
        page: Option<Pagination>,
    ) -> Result<Vec<Product>, DbError> {
        let records = self.records.read().await;
        let matching = records.products.iter().filter(|p| filter.matches(p));

        let products = match page {
            Some(p) => matching
                .skip(usize::try_from(p.offset()).unwrap_or(usize::MAX))
                .take(p.limit() as usize)
                .cloned()
                .collect(),
            None => matching.cloned().collect(),
        };

        Ok(products)
    }

    async fn count_products(&self, filter: ProductFilter) -> Result<u64, DbError> {
        let records = self.records.read().await;
        Ok(records.products.iter().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn find_product(&self, id: Uuid) -> Result<Option<ProductWithCategory>, DbError> {
        let records = self.records.read().await;
        let Some(product) = records.products.iter().find(|p| p.id == id) else {
            return Ok(None);
        };

        let category = records
            .category(product.category)
            .cloned()
            .ok_or_else(|| DbError::MissingReference {
                resource: "category",
                id: product.category.to_string(),
            })?;

        Ok(Some(ProductWithCategory::new(product.clone(), category)))
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<Product, DbError> {
        let mut records = self.records.write().await;

        // Same guarantee the foreign key gives the Postgres store
        if records.category(product.category_id).is_none() {
            return Err(DbError::MissingReference {
                resource: "category",
                id: product.category_id.to_string(),
            });
        }

        let product = Product {
            id: Uuid::new_v4(),
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category_id,
            image: product.image.clone(),
            rating: product.rating,
            created_at: Utc::now(),
        };

        records.products.push(product.clone());
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(category_id: Uuid, title: &str) -> NewProduct {
        NewProduct {
            title: title.into(),
            price: 1.0,
            description: "d".into(),
            category_id,
            image: "u".into(),
            rating: None,
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let store = MemoryCatalogStore::new();
        for name in ["b", "a", "c"] {
            store
                .insert_category(&CategoryName::new(name).unwrap())
                .await
                .unwrap();
        }

        let names: Vec<_> = store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[tokio::test]
    async fn duplicate_names_resolve_to_first() {
        let store = MemoryCatalogStore::new();
        let name = CategoryName::new("Books").unwrap();
        let first = store.insert_category(&name).await.unwrap();
        let second = store.insert_category(&name).await.unwrap();
        assert_ne!(first.id, second.id);

        let found = store.find_category_by_name("Books").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn name_lookup_is_exact() {
        let store = MemoryCatalogStore::new();
        store
            .insert_category(&CategoryName::new("Books").unwrap())
            .await
            .unwrap();

        assert!(store.find_category_by_name("books").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_dangling_category_reference() {
        let store = MemoryCatalogStore::new();
        let err = store
            .insert_product(&new_product(Uuid::new_v4(), "orphan"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::MissingReference { resource: "category", .. }));
        assert_eq!(store.count_products(ProductFilter::all()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn filters_and_pages_products() {
        let store = MemoryCatalogStore::new();
        let books = store
            .insert_category(&CategoryName::new("Books").unwrap())
            .await
            .unwrap();
        let games = store
            .insert_category(&CategoryName::new("Games").unwrap())
            .await
            .unwrap();

        for i in 0..4 {
            store
                .insert_product(&new_product(books.id, &format!("book {i}")))
                .await
                .unwrap();
            store
                .insert_product(&new_product(games.id, &format!("game {i}")))
                .await
                .unwrap();
        }

        let filter = ProductFilter::in_category(books.id);
        assert_eq!(store.count_products(filter).await.unwrap(), 4);
        assert_eq!(store.count_products(ProductFilter::all()).await.unwrap(), 8);

        let page = store
            .list_products(filter, Some(Pagination::new(2, 3)))
            .await
            .unwrap();
        let titles: Vec<_> = page.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["book 3"]);

        let beyond = store
            .list_products(filter, Some(Pagination::new(9, 3)))
            .await
            .unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn find_product_expands_category() {
        let store = MemoryCatalogStore::new();
        let books = store
            .insert_category(&CategoryName::new("Books").unwrap())
            .await
            .unwrap();
        let product = store.insert_product(&new_product(books.id, "Go")).await.unwrap();

        let found = store.find_product(product.id).await.unwrap().unwrap();
        assert_eq!(found.category, books);
        assert_eq!(found.title, "Go");
        assert!(store.find_product(Uuid::new_v4()).await.unwrap().is_none());
    }
}
