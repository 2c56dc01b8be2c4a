//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Company API",
        version = "0.1.0",
        description = "CRUD API for departments, employees and products on MongoDB"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/departments", api = domain_departments::ApiDoc),
        (path = "/api/employees", api = domain_employees::ApiDoc),
        (path = "/api/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
