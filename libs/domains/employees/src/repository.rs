use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EmployeeResult;
use crate::models::{CreateEmployee, Employee, EmployeeFilter, UpdateEmployee};

/// Repository trait for Employee persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, input: CreateEmployee) -> EmployeeResult<Employee>;

    async fn get_by_id(&self, id: Uuid) -> EmployeeResult<Option<Employee>>;

    /// List employees matching a filter
    async fn list(&self, filter: EmployeeFilter) -> EmployeeResult<Vec<Employee>>;

    async fn find_one(&self, filter: EmployeeFilter) -> EmployeeResult<Option<Employee>>;

    async fn count(&self) -> EmployeeResult<u64>;

    /// The employee at `offset` in natural order
    async fn get_nth(&self, offset: u64) -> EmployeeResult<Option<Employee>>;

    /// Apply a partial update; `None` if the ID does not exist
    async fn update(&self, id: Uuid, input: UpdateEmployee) -> EmployeeResult<Option<Employee>>;

    async fn update_many(&self, input: UpdateEmployee) -> EmployeeResult<u64>;

    /// Remove an employee, returning it; `None` if the ID does not exist
    async fn delete(&self, id: Uuid) -> EmployeeResult<Option<Employee>>;

    async fn delete_many(&self) -> EmployeeResult<u64>;
}
