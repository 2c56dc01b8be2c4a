//! Employees routes. Reads resolve department IDs against the departments collection.

use axum::Router;
use domain_departments::MongoDepartmentRepository;
use domain_employees::{EmployeeService, MongoEmployeeRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let service = EmployeeService::new(
        MongoEmployeeRepository::new(state.db.clone()),
        MongoDepartmentRepository::new(state.db.clone()),
    );
    handlers::router(service)
}
