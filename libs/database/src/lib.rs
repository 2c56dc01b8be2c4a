//! Database connectivity for the company services.
//!
//! Wraps the MongoDB driver with configuration loading, connection
//! verification, retry on startup, and health checks.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "companyDB");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
