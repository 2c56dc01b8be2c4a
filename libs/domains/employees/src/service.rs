//! Employee Service - Business logic layer

use domain_departments::{Department, DepartmentRepository};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{EmployeeError, EmployeeResult};
use crate::models::{CreateEmployee, Employee, EmployeeFilter, PopulatedEmployee, UpdateEmployee};
use crate::repository::EmployeeRepository;

/// Employee service: validation, not-found mapping, random selection and
/// department population for reads
pub struct EmployeeService<R: EmployeeRepository, D: DepartmentRepository> {
    repository: Arc<R>,
    departments: Arc<D>,
}

impl<R: EmployeeRepository, D: DepartmentRepository> EmployeeService<R, D> {
    pub fn new(repository: R, departments: D) -> Self {
        Self {
            repository: Arc::new(repository),
            departments: Arc::new(departments),
        }
    }

    /// Resolve department references with a single batched lookup
    async fn populate(&self, employees: Vec<Employee>) -> EmployeeResult<Vec<PopulatedEmployee>> {
        let mut ids: Vec<Uuid> = employees.iter().filter_map(Employee::department_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let departments: HashMap<Uuid, Department> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.departments
                .get_by_ids(ids)
                .await?
                .into_iter()
                .map(|department| (department.id, department))
                .collect()
        };

        Ok(employees
            .into_iter()
            .map(|employee| employee.populate(&departments))
            .collect())
    }

    async fn populate_one(&self, employee: Employee) -> EmployeeResult<PopulatedEmployee> {
        self.populate(vec![employee])
            .await?
            .pop()
            .ok_or_else(|| EmployeeError::Internal("population dropped the employee".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_employees(
        &self,
        filter: EmployeeFilter,
    ) -> EmployeeResult<Vec<PopulatedEmployee>> {
        let employees = self.repository.list(filter).await?;
        self.populate(employees).await
    }

    #[instrument(skip(self))]
    pub async fn get_random_employee(&self) -> EmployeeResult<PopulatedEmployee> {
        let count = self.repository.count().await?;
        if count == 0 {
            return Err(EmployeeError::NotFound);
        }

        let offset = rand::rng().random_range(0..count);
        let employee = self
            .repository
            .get_nth(offset)
            .await?
            .ok_or(EmployeeError::NotFound)?;
        self.populate_one(employee).await
    }

    #[instrument(skip(self))]
    pub async fn get_employee(&self, id: Uuid) -> EmployeeResult<PopulatedEmployee> {
        let employee = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound)?;
        self.populate_one(employee).await
    }

    #[instrument(skip(self, input))]
    pub async fn create_employee(&self, input: CreateEmployee) -> EmployeeResult<Employee> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_employee(
        &self,
        id: Uuid,
        input: UpdateEmployee,
    ) -> EmployeeResult<Employee> {
        input.validate()?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(EmployeeError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: Uuid) -> EmployeeResult<Employee> {
        self.repository
            .delete(id)
            .await?
            .ok_or(EmployeeError::NotFound)
    }
}

impl<R: EmployeeRepository, D: DepartmentRepository> Clone for EmployeeService<R, D> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            departments: Arc::clone(&self.departments),
        }
    }
}
