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
use domain_departments::{Department, DepartmentRepository};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EmployeeResult;
use crate::models::{
    CreateEmployee, DepartmentRef, Employee, EmployeeFilter, PopulatedEmployee, UpdateEmployee,
};
use crate::repository::EmployeeRepository;
use crate::service::EmployeeService;

type SharedService<R, D> = State<Arc<EmployeeService<R, D>>>;

/// OpenAPI documentation for Employees API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_employees,
        get_random_employee,
        get_employee,
        create_employee,
        update_employee,
        delete_employee,
    ),
    components(
        schemas(
            Employee,
            PopulatedEmployee,
            DepartmentRef,
            Department,
            CreateEmployee,
            UpdateEmployee,
            EmployeeFilter
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Employees", description = "Employee management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the employees router with all HTTP endpoints
pub fn router<R, D>(service: EmployeeService<R, D>) -> Router
where
    R: EmployeeRepository + 'static,
    D: DepartmentRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/random", get(get_random_employee))
        .route(
            "/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(shared_service)
}

/// List employees with optional equality filters
#[utoipa::path(
    get,
    path = "",
    tag = "Employees",
    params(EmployeeFilter),
    responses(
        (status = 200, description = "List of employees with departments populated", body = Vec<PopulatedEmployee>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_employees<R: EmployeeRepository, D: DepartmentRepository>(
    State(service): SharedService<R, D>,
    QueryParams(filter): QueryParams<EmployeeFilter>,
) -> EmployeeResult<Json<Vec<PopulatedEmployee>>> {
    let employees = service.list_employees(filter).await?;
    Ok(Json(employees))
}

/// Get a random employee
#[utoipa::path(
    get,
    path = "/random",
    tag = "Employees",
    responses(
        (status = 200, description = "An employee chosen at random", body = PopulatedEmployee),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_random_employee<R: EmployeeRepository, D: DepartmentRepository>(
    State(service): SharedService<R, D>,
) -> EmployeeResult<Json<PopulatedEmployee>> {
    let employee = service.get_random_employee().await?;
    Ok(Json(employee))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = PopulatedEmployee),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_employee<R: EmployeeRepository, D: DepartmentRepository>(
    State(service): SharedService<R, D>,
    UuidPath(id): UuidPath,
) -> EmployeeResult<Json<PopulatedEmployee>> {
    let employee = service.get_employee(id).await?;
    Ok(Json(employee))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "",
    tag = "Employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created", body = Acknowledged<Employee>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_employee<R: EmployeeRepository, D: DepartmentRepository>(
    State(service): SharedService<R, D>,
    ValidatedJson(input): ValidatedJson<CreateEmployee>,
) -> EmployeeResult<Json<Acknowledged<Employee>>> {
    let employee = service.create_employee(input).await?;
    Ok(Json(Acknowledged::ok(employee)))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Acknowledged<Employee>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_employee<R: EmployeeRepository, D: DepartmentRepository>(
    State(service): SharedService<R, D>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateEmployee>,
) -> EmployeeResult<Json<Acknowledged<Employee>>> {
    let employee = service.update_employee(id, input).await?;
    Ok(Json(Acknowledged::ok(employee)))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted; body holds the removed record", body = Acknowledged<Employee>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_employee<R: EmployeeRepository, D: DepartmentRepository>(
    State(service): SharedService<R, D>,
    UuidPath(id): UuidPath,
) -> EmployeeResult<Json<Acknowledged<Employee>>> {
    let employee = service.delete_employee(id).await?;
    Ok(Json(Acknowledged::ok(employee)))
}
