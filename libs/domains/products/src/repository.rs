use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Get every product whose ID is in `ids`
    async fn get_by_ids(&self, ids: Vec<Uuid>) -> ProductResult<Vec<Product>>;

    /// List products matching a filter
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// First product matching a filter
    async fn find_one(&self, filter: ProductFilter) -> ProductResult<Option<Product>>;

    /// Count all products
    async fn count(&self) -> ProductResult<u64>;

    /// The product at `offset` in natural order
    async fn get_nth(&self, offset: u64) -> ProductResult<Option<Product>>;

    /// Apply a partial update; `None` if the ID does not exist
    async fn update(
        &self,
        id: Uuid,
        input: UpdateProduct,
    ) -> ProductResult<Option<Product>>;

    /// Apply the same partial update to every product, returning the modified count
    async fn update_many(&self, input: UpdateProduct) -> ProductResult<u64>;

    /// Remove a product, returning it; `None` if the ID does not exist
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Remove every product, returning the deleted count
    async fn delete_many(&self) -> ProductResult<u64>;
}
