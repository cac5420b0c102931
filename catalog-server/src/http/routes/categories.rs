//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::Category;

/// Create category request
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

/// GET /api/get/categories - every category, 404 when there are none
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.catalog.list_categories().await?;
    Ok(Json(categories))
}

/// POST /categories - create a category
async fn create_category(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = state.catalog.create_category(req.name.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/get/categories", get(list_categories))
        .route("/categories", post(create_category))
}
