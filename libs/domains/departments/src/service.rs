//! Department Service - Business logic layer

use rand::Rng;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{DepartmentError, DepartmentResult};
use crate::models::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};
use crate::repository::DepartmentRepository;

/// Department service: validation, not-found mapping and random selection
pub struct DepartmentService<R: DepartmentRepository> {
    repository: Arc<R>,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_departments(
        &self,
        filter: DepartmentFilter,
    ) -> DepartmentResult<Vec<Department>> {
        self.repository.list(filter).await
    }

    /// Pick one department uniformly at random
    #[instrument(skip(self))]
    pub async fn get_random_department(&self) -> DepartmentResult<Department> {
        let count = self.repository.count().await?;
        if count == 0 {
            return Err(DepartmentError::NotFound);
        }

        let offset = rand::rng().random_range(0..count);
        self.repository
            .get_nth(offset)
            .await?
            .ok_or(DepartmentError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn get_department(&self, id: Uuid) -> DepartmentResult<Department> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(DepartmentError::NotFound)
    }

    #[instrument(skip(self, input))]
    pub async fn create_department(
        &self,
        input: CreateDepartment,
    ) -> DepartmentResult<Department> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_department(
        &self,
        id: Uuid,
        input: UpdateDepartment,
    ) -> DepartmentResult<Department> {
        input.validate()?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(DepartmentError::NotFound)
    }

    /// Delete a department, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_department(&self, id: Uuid) -> DepartmentResult<Department> {
        self.repository
            .delete(id)
            .await?
            .ok_or(DepartmentError::NotFound)
    }
}

impl<R: DepartmentRepository> Clone for DepartmentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockDepartmentRepository;
    use axum_helpers::SchemaField;
    use mockall::predicate::eq;

    fn department(name: &str) -> Department {
        Department::new(CreateDepartment::named(name))
    }

    #[tokio::test]
    async fn test_get_department_not_found() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = DepartmentService::new(repo);
        let result = service.get_department(Uuid::now_v7()).await;

        assert!(matches!(result, Err(DepartmentError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_random_on_empty_collection_is_not_found() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_get_nth().never();

        let service = DepartmentService::new(repo);
        let result = service.get_random_department().await;

        assert!(matches!(result, Err(DepartmentError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_random_picks_offset_within_count() {
        let picked = department("Sales");
        let expected = picked.clone();

        let mut repo = MockDepartmentRepository::new();
        repo.expect_count().returning(|| Ok(3));
        repo.expect_get_nth()
            .withf(|offset| *offset < 3)
            .times(1)
            .returning(move |_| Ok(Some(picked.clone())));

        let service = DepartmentService::new(repo);
        let result = service.get_random_department().await.unwrap();

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_get_random_when_emptied_between_calls() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_count().returning(|| Ok(1));
        repo.expect_get_nth().with(eq(0)).returning(|_| Ok(None));

        let service = DepartmentService::new(repo);
        let result = service.get_random_department().await;

        assert!(matches!(result, Err(DepartmentError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_department_rejects_invalid_input_without_writing() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_create().never();

        let service = DepartmentService::new(repo);
        let result = service
            .create_department(CreateDepartment {
                name: SchemaField::Missing,
            })
            .await;

        match result {
            Err(DepartmentError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("name"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_department_persists_valid_input() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Department::new(input)));

        let service = DepartmentService::new(repo);
        let created = service
            .create_department(CreateDepartment::named("Management"))
            .await
            .unwrap();

        assert_eq!(created.name, "Management");
    }

    #[tokio::test]
    async fn test_update_department_not_found() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = DepartmentService::new(repo);
        let result = service
            .update_department(Uuid::now_v7(), UpdateDepartment::named("Finance"))
            .await;

        assert!(matches!(result, Err(DepartmentError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_department_validates_present_fields() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_update().never();

        let service = DepartmentService::new(repo);
        let result = service
            .update_department(Uuid::now_v7(), UpdateDepartment::named("X"))
            .await;

        assert!(matches!(result, Err(DepartmentError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_department_returns_removed_record() {
        let existing = department("Legal");
        let id = existing.id;

        let mut repo = MockDepartmentRepository::new();
        repo.expect_delete()
            .with(eq(id))
            .returning(move |_| Ok(Some(existing.clone())));

        let service = DepartmentService::new(repo);
        let removed = service.delete_department(id).await.unwrap();

        assert_eq!(removed.id, id);
    }

    #[tokio::test]
    async fn test_delete_department_not_found() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_delete().returning(|_| Ok(None));

        let service = DepartmentService::new(repo);
        let result = service.delete_department(Uuid::now_v7()).await;

        assert!(matches!(result, Err(DepartmentError::NotFound)));
    }
}
