//! API routes. Nested under `/api` by `axum_helpers::create_router`.

pub mod departments;
pub mod employees;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/departments", departments::router(state))
        .nest("/employees", employees::router(state))
        .nest("/products", products::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt; // For oneshot()

    const UNREACHABLE: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200";

    // The driver connects lazily, so no server is needed to build the state.
    async fn unreachable_state() -> AppState {
        let mongo_client = mongodb::Client::with_uri_str(UNREACHABLE).await.unwrap();
        let db = mongo_client.database("companyDBtest");

        AppState {
            config: Config {
                app: app_info!(),
                mongodb: MongoConfig::with_database(UNREACHABLE, "companyDBtest"),
                server: ServerConfig::new("127.0.0.1".to_string(), 0),
                environment: Environment::Development,
            },
            mongo_client,
            db,
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_mongodb() {
        let state = unreachable_state().await;

        let (status, body) = get(routes(&state), "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["mongodb"], "disconnected");
        assert_eq!(body["status"], "not ready");
    }

    #[tokio::test]
    async fn test_each_collection_is_mounted() {
        let state = unreachable_state().await;

        for collection in ["departments", "employees", "products"] {
            let (status, body) = get(routes(&state), &format!("/{}/not-a-uuid", collection)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", collection);
            assert_eq!(body["message"], "Invalid UUID: not-a-uuid");
        }
    }
}
