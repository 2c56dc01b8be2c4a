use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum DepartmentError {
    #[error("Department not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DepartmentResult<T> = Result<T, DepartmentError>;

/// Convert DepartmentError to AppError for standardized error responses
impl From<DepartmentError> for AppError {
    fn from(err: DepartmentError) -> Self {
        match err {
            DepartmentError::NotFound => {
                AppError::NotFound(ErrorCode::NotFound.default_message().to_string())
            }
            DepartmentError::Validation(errors) => AppError::ValidationError(errors),
            DepartmentError::Database(msg) => AppError::Database(msg),
            DepartmentError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for DepartmentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for DepartmentError {
    fn from(err: mongodb::error::Error) -> Self {
        DepartmentError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for DepartmentError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        DepartmentError::Internal(err.to_string())
    }
}
