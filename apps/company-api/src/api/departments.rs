use axum::Router;
use domain_departments::{DepartmentService, MongoDepartmentRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoDepartmentRepository::new(state.db.clone());
    handlers::router(DepartmentService::new(repository))
}
