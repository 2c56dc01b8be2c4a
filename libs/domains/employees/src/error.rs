use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use domain_departments::DepartmentError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Employee not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    /// Failure while populating the department reference
    #[error(transparent)]
    Department(#[from] DepartmentError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EmployeeResult<T> = Result<T, EmployeeError>;

/// Convert EmployeeError to AppError for standardized error responses
impl From<EmployeeError> for AppError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound => {
                AppError::NotFound(ErrorCode::NotFound.default_message().to_string())
            }
            EmployeeError::Validation(errors) => AppError::ValidationError(errors),
            EmployeeError::Department(err) => err.into(),
            EmployeeError::Database(msg) => AppError::Database(msg),
            EmployeeError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for EmployeeError {
    fn from(err: mongodb::error::Error) -> Self {
        EmployeeError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for EmployeeError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        EmployeeError::Internal(err.to_string())
    }
}
