//! Catalog query layer
//!
//! Resolves category names, applies pagination, and enforces the
//! existence checks that sit in front of every write. Handlers call into
//! [`Catalog`]; it owns no state beyond the injected store handle.

use std::sync::Arc;

use uuid::Uuid;

use crate::db::{CatalogStore, DbError, ProductFilter};
use crate::models::{
    Category, CategoryName, NewProduct, Paginated, Pagination, Product, ProductDraft,
    ProductWithCategory, ValidationError,
};

/// Query layer error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Category \"{0}\" not found")]
    CategoryNotFound(String),

    #[error("Product with id {0} not found")]
    ProductNotFound(String),

    #[error("No categories found")]
    NoCategories,

    #[error("No products found in the \"{0}\" category")]
    EmptyCategory(String),

    #[error("Category with ID \"{0}\" does not exist")]
    UnknownCategoryId(Uuid),

    #[error(transparent)]
    Database(#[from] DbError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Product and category queries over a shared store
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn CatalogStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// List one page of products, optionally restricted to a category name.
    ///
    /// An empty or absent `category_name` means no filter. A name that does
    /// not resolve is `CategoryNotFound`; a filter that matches nothing is
    /// an empty page, not an error.
    pub async fn list_products(
        &self,
        page: Pagination,
        category_name: Option<&str>,
    ) -> CatalogResult<Paginated<Product>> {
        let filter = match category_name.filter(|name| !name.is_empty()) {
            Some(name) => ProductFilter::in_category(self.resolve_category(name).await?.id),
            None => ProductFilter::all(),
        };

        let items = self.store.list_products(filter, Some(page)).await?;
        let total = self.store.count_products(filter).await?;

        tracing::debug!(
            page = page.page,
            limit = page.limit,
            total,
            returned = items.len(),
            "listed products"
        );

        Ok(Paginated {
            items,
            total,
            page: page.page,
            limit: page.limit,
        })
    }

    /// Fetch one product with its category expanded.
    ///
    /// Ids that are not well-formed are reported as not found.
    pub async fn get_product(&self, id: &str) -> CatalogResult<ProductWithCategory> {
        let not_found = || CatalogError::ProductNotFound(id.to_owned());
        let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;

        self.store.find_product(uuid).await?.ok_or_else(not_found)
    }

    /// Every product in the named category.
    ///
    /// Unlike [`Catalog::list_products`], a category with no products is an
    /// error (`EmptyCategory`).
    pub async fn products_by_category_name(&self, name: &str) -> CatalogResult<Vec<Product>> {
        let category = self.resolve_category(name).await?;

        let products = self
            .store
            .list_products(ProductFilter::in_category(category.id), None)
            .await?;

        if products.is_empty() {
            return Err(CatalogError::EmptyCategory(name.to_owned()));
        }

        Ok(products)
    }

    /// Every category; an empty collection is `NoCategories`.
    pub async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let categories = self.store.list_categories().await?;

        if categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }

        Ok(categories)
    }

    /// Create a category. Duplicate names are allowed.
    pub async fn create_category(&self, name: Option<&str>) -> CatalogResult<Category> {
        let name = CategoryName::new(name.ok_or(ValidationError::Missing { field: "name" })?)?;
        let category = self.store.insert_category(&name).await?;

        tracing::info!(id = %category.id, name = %category.name, "created category");
        Ok(category)
    }

    /// Validate and create a product.
    ///
    /// The referenced category must exist before anything is written.
    pub async fn create_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let product = NewProduct::from_draft(draft)?;

        if !self.store.category_exists(product.category_id).await? {
            return Err(CatalogError::UnknownCategoryId(product.category_id));
        }

        let product = self.store.insert_product(&product).await?;

        tracing::info!(id = %product.id, category = %product.category, "created product");
        Ok(product)
    }

    async fn resolve_category(&self, name: &str) -> CatalogResult<Category> {
        self.store
            .find_category_by_name(name)
            .await?
            .ok_or_else(|| CatalogError::CategoryNotFound(name.to_owned()))
    }
}
