//! Departments Domain
//!
//! CRUD over the `departments` collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping, random pick
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, field rules
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_departments::{
//!     handlers,
//!     mongodb::MongoDepartmentRepository,
//!     service::DepartmentService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("companyDB");
//!
//! let repository = MongoDepartmentRepository::new(db);
//! let service = DepartmentService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DepartmentError, DepartmentResult};
pub use handlers::ApiDoc;
pub use models::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};
pub use crate::mongodb::MongoDepartmentRepository;
pub use repository::DepartmentRepository;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockDepartmentRepository;
pub use service::DepartmentService;
