//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ProductListQuery};
use crate::http::server::AppState;
use crate::models::{Paginated, Product, ProductDraft, ProductWithCategory};

/// One page of the product list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub products: Vec<Product>,
    pub total_products: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

impl From<Paginated<Product>> for ProductPageResponse {
    fn from(page: Paginated<Product>) -> Self {
        Self {
            total_pages: page.total_pages(),
            total_products: page.total,
            current_page: page.page,
            products: page.items,
        }
    }
}

/// GET /api/products - paginated list, optionally filtered by category name
async fn list_products(
    State(state): State<Arc<AppState>>,
    query: ProductListQuery,
) -> Result<Json<ProductPageResponse>, ApiError> {
    let page = state
        .catalog
        .list_products(query.pagination, query.category_name.as_deref())
        .await?;

    Ok(Json(ProductPageResponse::from(page)))
}

/// GET /products/{id} - single product with its category expanded
async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProductWithCategory>, ApiError> {
    let product = state.catalog.get_product(&id).await?;
    Ok(Json(product))
}

/// POST /products - create a product in an existing category
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<ProductDraft>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.catalog.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products/category/{categoryName} - every product in a category
async fn products_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_name): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .catalog
        .products_by_category_name(&category_name)
        .await?;

    Ok(Json(products))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/category/{category_name}", get(products_by_category))
        .route("/products", post(create_product))
        .route("/products/{id}", get(get_product))
}
