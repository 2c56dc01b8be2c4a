//! Query string extractor with the standard error body.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Like [`Query`], but a malformed query string is rejected with
/// `400 INVALID_QUERY` in the [`ErrorResponse`](crate::ErrorResponse) shape.
///
/// # Example
/// ```ignore
/// async fn list(QueryParams(filter): QueryParams<DepartmentFilter>) -> String {
///     format!("{:?}", filter.limit)
/// }
/// ```
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(QueryParams(params))
    }
}
