//! Employees Domain
//!
//! CRUD over the `employees` collection. An employee's `department` holds
//! either a department ID or free text; read endpoints swap a resolvable ID
//! for the department record.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_departments::MongoDepartmentRepository;
//! use domain_employees::{EmployeeService, MongoEmployeeRepository, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("companyDB");
//!
//! let service = EmployeeService::new(
//!     MongoEmployeeRepository::new(db.clone()),
//!     MongoDepartmentRepository::new(db),
//! );
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

pub use error::{EmployeeError, EmployeeResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateEmployee, DepartmentRef, Employee, EmployeeFilter, PopulatedEmployee, UpdateEmployee,
};
pub use crate::mongodb::MongoEmployeeRepository;
pub use repository::EmployeeRepository;
pub use service::EmployeeService;
