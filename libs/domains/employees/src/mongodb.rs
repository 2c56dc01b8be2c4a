//! MongoDB implementation of EmployeeRepository

use async_trait::async_trait;
use chrono::Utc;
use database::mongodb::id_filter;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, to_bson},
    options::{FindOneOptions, FindOptions, ReturnDocument},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::EmployeeResult;
use crate::models::{CreateEmployee, Employee, EmployeeFilter, UpdateEmployee};
use crate::repository::EmployeeRepository;

pub const COLLECTION: &str = "employees";

#[derive(Clone)]
pub struct MongoEmployeeRepository {
    collection: Collection<Employee>,
}

impl MongoEmployeeRepository {
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Employee>(collection_name);
        Self { collection }
    }

    /// Paging for `list`. `_id` holds a UUID v7 string, so it sorts by creation time.
    fn find_options(filter: &EmployeeFilter) -> FindOptions {
        FindOptions::builder()
            .limit(filter.limit.map(|limit| i64::try_from(limit).unwrap_or(i64::MAX)))
            .skip(filter.offset)
            .sort(doc! { "_id": 1 })
            .build()
    }

    fn build_filter(filter: &EmployeeFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref first_name) = filter.first_name {
            doc.insert("firstName", first_name);
        }
        if let Some(ref last_name) = filter.last_name {
            doc.insert("lastName", last_name);
        }
        if let Some(ref department) = filter.department {
            doc.insert("department", department);
        }

        doc
    }

    fn build_update(input: UpdateEmployee) -> EmployeeResult<Document> {
        let mut set = doc! { "updated_at": to_bson(&Utc::now())? };

        if let Some(first_name) = input.first_name.into_text() {
            set.insert("firstName", first_name);
        }
        if let Some(last_name) = input.last_name.into_text() {
            set.insert("lastName", last_name);
        }
        if let Some(department) = input.department.into_text() {
            set.insert("department", department);
        }

        Ok(doc! { "$set": set })
    }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateEmployee) -> EmployeeResult<Employee> {
        let employee = Employee::new(input);

        self.collection.insert_one(&employee).await?;

        tracing::info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> EmployeeResult<Option<Employee>> {
        let employee = self.collection.find_one(id_filter(id)).await?;
        Ok(employee)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: EmployeeFilter) -> EmployeeResult<Vec<Employee>> {
        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(Self::find_options(&filter))
            .await?;
        let employees: Vec<Employee> = cursor.try_collect().await?;

        Ok(employees)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, filter: EmployeeFilter) -> EmployeeResult<Option<Employee>> {
        let employee = self
            .collection
            .find_one(Self::build_filter(&filter))
            .await?;
        Ok(employee)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> EmployeeResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn get_nth(&self, offset: u64) -> EmployeeResult<Option<Employee>> {
        let options = FindOneOptions::builder().skip(offset).build();
        let employee = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?;
        Ok(employee)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateEmployee) -> EmployeeResult<Option<Employee>> {
        let employee = self
            .collection
            .find_one_and_update(id_filter(id), Self::build_update(input)?)
            .return_document(ReturnDocument::After)
            .await?;

        if employee.is_some() {
            tracing::info!(employee_id = %id, "Employee updated");
        }
        Ok(employee)
    }

    #[instrument(skip(self, input))]
    async fn update_many(&self, input: UpdateEmployee) -> EmployeeResult<u64> {
        let result = self
            .collection
            .update_many(doc! {}, Self::build_update(input)?)
            .await?;

        tracing::info!(modified = result.modified_count, "Employees updated");
        Ok(result.modified_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> EmployeeResult<Option<Employee>> {
        let employee = self.collection.find_one_and_delete(id_filter(id)).await?;

        if employee.is_some() {
            tracing::info!(employee_id = %id, "Employee deleted");
        }
        Ok(employee)
    }

    #[instrument(skip(self))]
    async fn delete_many(&self) -> EmployeeResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;

        tracing::info!(deleted = result.deleted_count, "Employees deleted");
        Ok(result.deleted_count)
    }
}
