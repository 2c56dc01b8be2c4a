//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use database::mongodb::{id_filter, ids_filter};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, to_bson},
    options::{FindOneOptions, FindOptions, ReturnDocument},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

pub const COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Repository over the `products` collection of `db`
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Paging for `list`. `_id` holds a UUID v7 string, so it sorts by creation time.
    fn find_options(filter: &ProductFilter) -> FindOptions {
        FindOptions::builder()
            .limit(filter.limit.map(|limit| i64::try_from(limit).unwrap_or(i64::MAX)))
            .skip(filter.offset)
            .sort(doc! { "_id": 1 })
            .build()
    }

    fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref name) = filter.name {
            doc.insert("name", name);
        }

        if let Some(ref client) = filter.client {
            doc.insert("client", client);
        }

        doc
    }

    /// `$set` body for a partial update, always touching `updated_at`
    fn build_update(input: UpdateProduct) -> ProductResult<Document> {
        let mut set = doc! { "updated_at": to_bson(&Utc::now())? };

        if let Some(name) = input.name.into_text() {
            set.insert("name", name);
        }

        if let Some(client) = input.client.into_text() {
            set.insert("client", client);
        }

        Ok(doc! { "$set": set })
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn get_by_ids(&self, ids: Vec<Uuid>) -> ProductResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection.find(ids_filter(&ids)).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(Self::find_options(&filter))
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, filter: ProductFilter) -> ProductResult<Option<Product>> {
        let product = self
            .collection
            .find_one(Self::build_filter(&filter))
            .await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProductResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn get_nth(&self, offset: u64) -> ProductResult<Option<Product>> {
        let options = FindOneOptions::builder().skip(offset).build();
        let product = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?;
        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn update(
        &self,
        id: Uuid,
        input: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        let product = self
            .collection
            .find_one_and_update(id_filter(id), Self::build_update(input)?)
            .return_document(ReturnDocument::After)
            .await?;

        if product.is_some() {
            tracing::info!(product_id = %id, "Product updated");
        }
        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn update_many(&self, input: UpdateProduct) -> ProductResult<u64> {
        let result = self
            .collection
            .update_many(doc! {}, Self::build_update(input)?)
            .await?;

        tracing::info!(modified = result.modified_count, "Products updated");
        Ok(result.modified_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one_and_delete(id_filter(id)).await?;

        if product.is_some() {
            tracing::info!(product_id = %id, "Product deleted");
        }
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete_many(&self) -> ProductResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;

        tracing::info!(deleted = result.deleted_count, "Products deleted");
        Ok(result.deleted_count)
    }
}
