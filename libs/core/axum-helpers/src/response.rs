use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body for write operations: `{ "message": "OK", "document": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Acknowledged<T> {
    pub message: String,
    pub document: T,
}

impl<T> Acknowledged<T> {
    pub fn ok(document: T) -> Self {
        Self {
            message: "OK".to_string(),
            document,
        }
    }
}
