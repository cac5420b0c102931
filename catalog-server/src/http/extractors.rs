//! Custom Axum extractors
//!
//! Wrap axum's `Json` and `Query` so that parse failures come back in the
//! same JSON error shape as every other 400.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams};

/// JSON request body; rejections become `ApiError::BadRequest`
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductListParams {
    page: Option<u32>,
    limit: Option<u32>,
    category_name: Option<String>,
}

/// `?page=&limit=&categoryName=` for the product list
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    pub pagination: Pagination,
    pub category_name: Option<String>,
}

impl<S> FromRequestParts<S> for ProductListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<ProductListParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self {
            pagination: Pagination::from(PaginationParams {
                page: params.page,
                limit: params.limit,
            }),
            category_name: params.category_name,
        })
    }
}
