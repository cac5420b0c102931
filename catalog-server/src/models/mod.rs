//! Catalog records and validated inputs
//!
//! All client input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod product;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{Category, CategoryName};
pub use product::{NewProduct, Product, ProductDraft, ProductWithCategory, Rating};
pub use pagination::{Paginated, Pagination, PaginationParams};
