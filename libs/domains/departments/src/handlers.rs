use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use axum_helpers::{
    Acknowledged, QueryParams, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::DepartmentResult;
use crate::models::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};
use crate::repository::DepartmentRepository;
use crate::service::DepartmentService;

/// OpenAPI documentation for Departments API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_departments,
        get_random_department,
        get_department,
        create_department,
        update_department,
        delete_department,
    ),
    components(
        schemas(Department, CreateDepartment, UpdateDepartment, DepartmentFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Departments", description = "Department management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the departments router with all HTTP endpoints
pub fn router<R: DepartmentRepository + 'static>(service: DepartmentService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route("/random", get(get_random_department))
        .route(
            "/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .with_state(shared_service)
}

/// List departments with optional equality filters
#[utoipa::path(
    get,
    path = "",
    tag = "Departments",
    params(DepartmentFilter),
    responses(
        (status = 200, description = "List of departments", body = Vec<Department>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_departments<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    QueryParams(filter): QueryParams<DepartmentFilter>,
) -> DepartmentResult<Json<Vec<Department>>> {
    let departments = service.list_departments(filter).await?;
    Ok(Json(departments))
}

/// Get a random department
#[utoipa::path(
    get,
    path = "/random",
    tag = "Departments",
    responses(
        (status = 200, description = "A department chosen at random", body = Department),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_random_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
) -> DepartmentResult<Json<Department>> {
    let department = service.get_random_department().await?;
    Ok(Json(department))
}

/// Get a department by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Departments",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = Department),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    UuidPath(id): UuidPath,
) -> DepartmentResult<Json<Department>> {
    let department = service.get_department(id).await?;
    Ok(Json(department))
}

/// Create a department
#[utoipa::path(
    post,
    path = "",
    tag = "Departments",
    request_body = CreateDepartment,
    responses(
        (status = 200, description = "Department created", body = Acknowledged<Department>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateDepartment>,
) -> DepartmentResult<Json<Acknowledged<Department>>> {
    let department = service.create_department(input).await?;
    Ok(Json(Acknowledged::ok(department)))
}

/// Update a department
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Departments",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    request_body = UpdateDepartment,
    responses(
        (status = 200, description = "Department updated", body = Acknowledged<Department>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateDepartment>,
) -> DepartmentResult<Json<Acknowledged<Department>>> {
    let department = service.update_department(id, input).await?;
    Ok(Json(Acknowledged::ok(department)))
}

/// Delete a department
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Departments",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department deleted; body holds the removed record", body = Acknowledged<Department>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    UuidPath(id): UuidPath,
) -> DepartmentResult<Json<Acknowledged<Department>>> {
    let department = service.delete_department(id).await?;
    Ok(Json(Acknowledged::ok(department)))
}
