//! Product Service - Business logic layer

use rand::Rng;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service: validation, not-found mapping and random selection
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    /// Pick one product uniformly at random
    #[instrument(skip(self))]
    pub async fn get_random_product(&self) -> ProductResult<Product> {
        let count = self.repository.count().await?;
        if count == 0 {
            return Err(ProductError::NotFound);
        }

        let offset = rand::rng().random_range(0..count);
        self.repository
            .get_nth(offset)
            .await?
            .ok_or(ProductError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    #[instrument(skip(self, input))]
    pub async fn create_product(
        &self,
        input: CreateProduct,
    ) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: Uuid,
        input: UpdateProduct,
    ) -> ProductResult<Product> {
        input.validate()?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .delete(id)
            .await?
            .ok_or(ProductError::NotFound)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
