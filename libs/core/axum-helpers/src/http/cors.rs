use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer restricted to the given origins.
///
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin. Development only.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Restricted layer for the configured origins, permissive when none are set.
pub fn cors_layer_for(
    origins: &[String],
) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(create_permissive_cors_layer());
    }

    let values = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("CORS configured with allowed origins: {}", origins.join(","));
    Ok(create_cors_layer(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_for_rejects_invalid_origin() {
        assert!(cors_layer_for(&["bad\norigin".to_string()]).is_err());
    }

    #[test]
    fn test_cors_layer_for_accepts_lists_and_empty() {
        assert!(cors_layer_for(&[]).is_ok());
        assert!(cors_layer_for(&["http://localhost:3000".to_string()]).is_ok());
    }
}
