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

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_random_product,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, ProductFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/random", get(get_random_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products with optional equality filters
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(filter): QueryParams<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Get a random product
#[utoipa::path(
    get,
    path = "/random",
    tag = "Products",
    responses(
        (status = 200, description = "A product chosen at random", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_random_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Product>> {
    let product = service.get_random_product().await?;
    Ok(Json(product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = Acknowledged<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<Json<Acknowledged<Product>>> {
    let product = service.create_product(input).await?;
    Ok(Json(Acknowledged::ok(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Acknowledged<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Acknowledged<Product>>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(Acknowledged::ok(product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted; body holds the removed record", body = Acknowledged<Product>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Acknowledged<Product>>> {
    let product = service.delete_product(id).await?;
    Ok(Json(Acknowledged::ok(product)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt; // For oneshot()
    use uuid::Uuid;

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn app(repo: MockProductRepository) -> Router {
        router(ProductService::new(repo))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn product(name: &str) -> Product {
        Product::new(CreateProduct::new(name, "Acme Corp"))
    }

    #[tokio::test]
    async fn test_list_passes_filters_to_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .withf(|filter| {
                filter.client.as_deref() == Some("Acme Corp")
                    && filter.name.is_none()
                    && filter.offset == Some(2)
            })
            .returning(|_| Ok(vec![product("Soap")]));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .uri("/?client=Acme%20Corp&offset=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Soap");
        assert_eq!(body[0]["client"], "Acme Corp");
    }

    #[tokio::test]
    async fn test_list_with_negative_limit_returns_400_error_body() {
        let mut repo = MockProductRepository::new();
        repo.expect_list().never();

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .uri("/?limit=-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "INVALID_QUERY");
        assert!(body["message"].as_str().unwrap().contains("limit"));
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_404_with_message() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let uri = format!("/{}", Uuid::now_v7());
        let response = app(repo)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "Not found");
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_400() {
        let repo = MockProductRepository::new();

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .uri("/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "INVALID_UUID");
    }

    #[tokio::test]
    async fn test_random_route_is_not_captured_by_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|| Ok(1));
        repo.expect_get_nth()
            .returning(|_| Ok(Some(product("Lotion"))));

        let response = app(repo)
            .oneshot(Request::builder().uri("/random").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["name"], "Lotion");
    }

    #[tokio::test]
    async fn test_random_on_empty_collection_returns_404() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|| Ok(0));

        let response = app(repo)
            .oneshot(Request::builder().uri("/random").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_returns_ok_message_and_document() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .returning(|input| Ok(Product::new(input)));

        let response = app(repo)
            .oneshot(json_request("POST", "/", json!({ "name": "Shampoo", "client": "Acme Corp" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "OK");
        assert_eq!(body["document"]["name"], "Shampoo");
        assert_eq!(body["document"]["client"], "Acme Corp");
        assert!(body["document"]["_id"].is_string());
    }

    #[tokio::test]
    async fn test_create_with_missing_fields_returns_field_errors() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let response = app(repo)
            .oneshot(json_request("POST", "/", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["name"][0]["code"], "required");
        assert_eq!(body["details"]["client"][0]["code"], "required");
    }

    #[tokio::test]
    async fn test_create_with_array_name_returns_type_error() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let response = app(repo)
            .oneshot(json_request("POST", "/", json!({ "name": [], "client": "Acme Corp" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["details"]["name"][0]["code"], "type");
    }

    #[tokio::test]
    async fn test_update_returns_updated_document() {
        let existing = product("Soap");
        let id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .withf(move |got, input| *got == id && input.name.as_text() == Some("Bar Soap"))
            .returning(move |_, _| {
                let mut updated = existing.clone();
                updated.name = "Bar Soap".to_string();
                Ok(Some(updated))
            });

        let response = app(repo)
            .oneshot(json_request(
                "PUT",
                &format!("/{}", id),
                json!({ "name": "Bar Soap" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "OK");
        assert_eq!(body["document"]["name"], "Bar Soap");
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_404() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let response = app(repo)
            .oneshot(json_request(
                "PUT",
                &format!("/{}", Uuid::now_v7()),
                json!({ "name": "Bar Soap" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_document() {
        let existing = product("Toothpaste");
        let id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_delete()
            .returning(move |_| Ok(Some(existing.clone())));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["document"]["_id"], id.to_string());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_404() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| Ok(None));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_database_failure_returns_500_with_message() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .returning(|_| Err(ProductError::Database("connection refused".to_string())));

        let response = app(repo)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "connection refused");
    }
}
