//! MongoDB implementation of DepartmentRepository

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

use crate::error::DepartmentResult;
use crate::models::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};
use crate::repository::DepartmentRepository;

pub const COLLECTION: &str = "departments";

/// MongoDB implementation of the DepartmentRepository
#[derive(Clone)]
pub struct MongoDepartmentRepository {
    collection: Collection<Department>,
}

impl MongoDepartmentRepository {
    /// Repository over the `departments` collection of `db`
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Department>(collection_name);
        Self { collection }
    }

    /// Paging for `list`. `_id` holds a UUID v7 string, so it sorts by creation time.
    fn find_options(filter: &DepartmentFilter) -> FindOptions {
        FindOptions::builder()
            .limit(filter.limit.map(|limit| i64::try_from(limit).unwrap_or(i64::MAX)))
            .skip(filter.offset)
            .sort(doc! { "_id": 1 })
            .build()
    }

    fn build_filter(filter: &DepartmentFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref name) = filter.name {
            doc.insert("name", name);
        }

        doc
    }

    /// `$set` body for a partial update, always touching `updated_at`
    fn build_update(input: UpdateDepartment) -> DepartmentResult<Document> {
        let mut set = doc! { "updated_at": to_bson(&Utc::now())? };

        if let Some(name) = input.name.into_text() {
            set.insert("name", name);
        }

        Ok(doc! { "$set": set })
    }
}

#[async_trait]
impl DepartmentRepository for MongoDepartmentRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateDepartment) -> DepartmentResult<Department> {
        let department = Department::new(input);

        self.collection.insert_one(&department).await?;

        tracing::info!(department_id = %department.id, "Department created");
        Ok(department)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> DepartmentResult<Option<Department>> {
        let department = self.collection.find_one(id_filter(id)).await?;
        Ok(department)
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn get_by_ids(&self, ids: Vec<Uuid>) -> DepartmentResult<Vec<Department>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection.find(ids_filter(&ids)).await?;
        let departments: Vec<Department> = cursor.try_collect().await?;
        Ok(departments)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: DepartmentFilter) -> DepartmentResult<Vec<Department>> {
        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(Self::find_options(&filter))
            .await?;
        let departments: Vec<Department> = cursor.try_collect().await?;

        Ok(departments)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, filter: DepartmentFilter) -> DepartmentResult<Option<Department>> {
        let department = self
            .collection
            .find_one(Self::build_filter(&filter))
            .await?;
        Ok(department)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> DepartmentResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn get_nth(&self, offset: u64) -> DepartmentResult<Option<Department>> {
        let options = FindOneOptions::builder().skip(offset).build();
        let department = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?;
        Ok(department)
    }

    #[instrument(skip(self, input))]
    async fn update(
        &self,
        id: Uuid,
        input: UpdateDepartment,
    ) -> DepartmentResult<Option<Department>> {
        let department = self
            .collection
            .find_one_and_update(id_filter(id), Self::build_update(input)?)
            .return_document(ReturnDocument::After)
            .await?;

        if department.is_some() {
            tracing::info!(department_id = %id, "Department updated");
        }
        Ok(department)
    }

    #[instrument(skip(self, input))]
    async fn update_many(&self, input: UpdateDepartment) -> DepartmentResult<u64> {
        let result = self
            .collection
            .update_many(doc! {}, Self::build_update(input)?)
            .await?;

        tracing::info!(modified = result.modified_count, "Departments updated");
        Ok(result.modified_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> DepartmentResult<Option<Department>> {
        let department = self.collection.find_one_and_delete(id_filter(id)).await?;

        if department.is_some() {
            tracing::info!(department_id = %id, "Department deleted");
        }
        Ok(department)
    }

    #[instrument(skip(self))]
    async fn delete_many(&self) -> DepartmentResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;

        tracing::info!(deleted = result.deleted_count, "Departments deleted");
        Ok(result.deleted_count)
    }
}
