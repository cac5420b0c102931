//! Product records and creation-time validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{non_empty_text, required};
use super::{Category, ValidationError};

const MAX_TITLE_LEN: usize = 256;
const MAX_DESCRIPTION_LEN: usize = 10_000;
const MAX_IMAGE_LEN: usize = 2048;

/// Optional customer rating attached to a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl Rating {
    fn is_empty(&self) -> bool {
        self.rate.is_none() && self.count.is_none()
    }
}

/// Product record with its category stored as a reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: Uuid,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub created_at: DateTime<Utc>,
}

/// Product with the category reference expanded into the full record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithCategory {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: Category,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub created_at: DateTime<Utc>,
}

impl ProductWithCategory {
    /// Expand `product` with the category record it references.
    pub fn new(product: Product, category: Category) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            description: product.description,
            category,
            image: product.image,
            rating: product.rating,
            created_at: product.created_at,
        }
    }
}

/// Product creation body as sent by clients.
///
/// Every field is optional here so that a missing field surfaces as a
/// `ValidationError` naming it, rather than a generic parse failure.
/// A client-supplied `id` is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub image: Option<String>,
    pub rating: Option<Rating>,
}

/// Validated product ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_id: Uuid,
    pub image: String,
    pub rating: Option<Rating>,
}

impl NewProduct {
    /// Validate a draft.
    ///
    /// # Rules
    /// - `title`, `description`, `image` present and not blank; stored as sent
    /// - `price` present, finite and not negative
    /// - `categoryId` present and a well-formed identifier
    /// - `rating.rate` finite, `rating.count` not negative; an empty rating is dropped
    ///
    /// Whether the category actually exists is checked by the catalog, not here.
    pub fn from_draft(draft: ProductDraft) -> Result<Self, ValidationError> {
        let title = non_empty_text(&required(draft.title, "title")?, "title", MAX_TITLE_LEN)?;

        let price = required(draft.price, "price")?;
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::Invalid {
                field: "price",
                reason: "must be a non-negative number",
            });
        }

        let description = non_empty_text(
            &required(draft.description, "description")?,
            "description",
            MAX_DESCRIPTION_LEN,
        )?;

        let category_id = required(draft.category_id, "categoryId")?;
        let category_id = Uuid::parse_str(category_id.trim()).map_err(|_| {
            ValidationError::Invalid {
                field: "categoryId",
                reason: "not a valid category id",
            }
        })?;

        let image = non_empty_text(&required(draft.image, "image")?, "image", MAX_IMAGE_LEN)?;

        let rating = match draft.rating {
            Some(rating) if rating.is_empty() => None,
            Some(rating) => {
                if rating.rate.is_some_and(|rate| !rate.is_finite()) {
                    return Err(ValidationError::Invalid {
                        field: "rating.rate",
                        reason: "must be a number",
                    });
                }
                if rating.count.is_some_and(|count| count < 0) {
                    return Err(ValidationError::Invalid {
                        field: "rating.count",
                        reason: "must not be negative",
                    });
                }
                Some(rating)
            }
            None => None,
        };

        Ok(Self {
            title,
            price,
            description,
            category_id,
            image,
            rating,
        })
    }
}
