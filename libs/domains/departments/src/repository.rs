use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DepartmentResult;
use crate::models::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};

/// Repository trait for Department persistence
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Insert a new department
    async fn create(&self, input: CreateDepartment) -> DepartmentResult<Department>;

    /// Get a department by ID
    async fn get_by_id(&self, id: Uuid) -> DepartmentResult<Option<Department>>;

    /// Get every department whose ID is in `ids`
    async fn get_by_ids(&self, ids: Vec<Uuid>) -> DepartmentResult<Vec<Department>>;

    /// List departments matching a filter
    async fn list(&self, filter: DepartmentFilter) -> DepartmentResult<Vec<Department>>;

    /// First department matching a filter
    async fn find_one(&self, filter: DepartmentFilter) -> DepartmentResult<Option<Department>>;

    /// Count all departments
    async fn count(&self) -> DepartmentResult<u64>;

    /// The department at `offset` in natural order
    async fn get_nth(&self, offset: u64) -> DepartmentResult<Option<Department>>;

    /// Apply a partial update; `None` if the ID does not exist
    async fn update(
        &self,
        id: Uuid,
        input: UpdateDepartment,
    ) -> DepartmentResult<Option<Department>>;

    /// Apply the same partial update to every department, returning the modified count
    async fn update_many(&self, input: UpdateDepartment) -> DepartmentResult<u64>;

    /// Remove a department, returning it; `None` if the ID does not exist
    async fn delete(&self, id: Uuid) -> DepartmentResult<Option<Department>>;

    /// Remove every department, returning the deleted count
    async fn delete_many(&self) -> DepartmentResult<u64>;
}
