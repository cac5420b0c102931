//! Postgres-backed catalog store
//!
//! - Ordering is always `seq ASC`, i.e. insertion order
//! - Product fetch expands the category with a JOIN (no second query)
//! - Optional filters bind as NULL: `$1::uuid IS NULL OR category_id = $1`

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{CatalogStore, DbError, ProductFilter};
use crate::models::{
    Category, CategoryName, NewProduct, Pagination, Product, ProductWithCategory, Rating,
};

const PRODUCT_COLUMNS: &str =
    "id, title, price, description, category_id, image, rating_rate, rating_count, created_at";

/// Catalog store over a shared connection pool
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn category_from_row(row: &PgRow) -> Category {
    Category {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

fn rating_from_row(row: &PgRow, rate_col: &str, count_col: &str) -> Option<Rating> {
    let rating = Rating {
        rate: row.get(rate_col),
        count: row.get(count_col),
    };
    (rating.rate.is_some() || rating.count.is_some()).then_some(rating)
}

fn product_from_row(row: &PgRow) -> Product {
    Product {
        id: row.get("id"),
        title: row.get("title"),
        price: row.get("price"),
        description: row.get("description"),
        category: row.get("category_id"),
        image: row.get("image"),
        rating: rating_from_row(row, "rating_rate", "rating_count"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query("SELECT id, name, created_at FROM categories ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM categories
            WHERE name = $1
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(category_from_row))
    }

    async fn category_exists(&self, id: Uuid) -> Result<bool, DbError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }

    async fn insert_category(&self, name: &CategoryName) -> Result<Category, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(category_from_row(&row))
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
        page: Option<Pagination>,
    ) -> Result<Vec<Product>, DbError> {
        // LIMIT NULL means no limit in Postgres
        let (limit, offset) = match page {
            Some(p) => (
                Some(i64::from(p.limit())),
                i64::try_from(p.offset()).unwrap_or(i64::MAX),
            ),
            None => (None, 0),
        };

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE ($1::uuid IS NULL OR category_id = $1)
            ORDER BY seq
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query(&sql)
            .bind(filter.category)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(product_from_row).collect())
    }

    async fn count_products(&self, filter: ProductFilter) -> Result<u64, DbError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM products WHERE ($1::uuid IS NULL OR category_id = $1)",
        )
        .bind(filter.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0.max(0) as u64)
    }

    async fn find_product(&self, id: Uuid) -> Result<Option<ProductWithCategory>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT
                p.id, p.title, p.price, p.description, p.category_id, p.image,
                p.rating_rate, p.rating_count, p.created_at,
                c.name AS category_name,
                c.created_at AS category_created_at
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| {
            let category = Category {
                id: r.get("category_id"),
                name: r.get("category_name"),
                created_at: r.get("category_created_at"),
            };
            ProductWithCategory::new(product_from_row(&r), category)
        }))
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<Product, DbError> {
        let sql = format!(
            r#"
            INSERT INTO products
                (title, price, description, category_id, image, rating_rate, rating_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let rating = product.rating.unwrap_or_default();
        let row = sqlx::query(&sql)
            .bind(&product.title)
            .bind(product.price)
            .bind(&product.description)
            .bind(product.category_id)
            .bind(&product.image)
            .bind(rating.rate)
            .bind(rating.count)
            .fetch_one(&self.pool)
            .await?;

        Ok(product_from_row(&row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations, DEFAULT_MAX_CONNECTIONS};

    // Run with: DATABASE_URL=postgres://... cargo test -p catalog-server -- --ignored

    async fn store() -> PgCatalogStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, DEFAULT_MAX_CONNECTIONS)
            .await
            .expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgCatalogStore::new(pool)
    }

    fn unique_name(prefix: &str) -> CategoryName {
        CategoryName::new(&format!("{prefix}-{}", Uuid::new_v4())).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let store = store().await;
        migrations::run(store.pool()).await.expect("second run failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn category_round_trip_by_name() {
        let store = store().await;
        let name = unique_name("books");
        let created = store.insert_category(&name).await.unwrap();

        let found = store.find_category_by_name(name.as_str()).await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(created.id));
        assert!(store.category_exists(created.id).await.unwrap());
        assert!(!store.category_exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn filtered_products_paginate_in_insertion_order() {
        let store = store().await;
        let category = store.insert_category(&unique_name("paged")).await.unwrap();

        for i in 0..7 {
            let product = NewProduct {
                title: format!("item {i}"),
                price: f64::from(i),
                description: "d".into(),
                category_id: category.id,
                image: "u".into(),
                rating: None,
            };
            store.insert_product(&product).await.unwrap();
        }

        let filter = ProductFilter::in_category(category.id);
        assert_eq!(store.count_products(filter).await.unwrap(), 7);

        let second = store
            .list_products(filter, Some(Pagination::new(2, 5)))
            .await
            .unwrap();
        let titles: Vec<_> = second.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["item 5", "item 6"]);

        let all = store.list_products(filter, None).await.unwrap();
        assert_eq!(all.len(), 7);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_product_expands_category() {
        let store = store().await;
        let category = store.insert_category(&unique_name("expand")).await.unwrap();
        let product = store
            .insert_product(&NewProduct {
                title: "Go".into(),
                price: 10.0,
                description: "d".into(),
                category_id: category.id,
                image: "u".into(),
                rating: Some(Rating {
                    rate: Some(4.5),
                    count: Some(12),
                }),
            })
            .await
            .unwrap();

        let found = store.find_product(product.id).await.unwrap().unwrap();
        assert_eq!(found.category, category);
        assert_eq!(found.rating, product.rating);
        assert!(store.find_product(Uuid::new_v4()).await.unwrap().is_none());
    }
}
