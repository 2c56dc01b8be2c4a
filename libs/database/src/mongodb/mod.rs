//! MongoDB connector and health checks

mod config;
mod connector;
mod health;
mod ids;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{connect, connect_from_config, connect_from_config_with_retry};
pub use health::check_health;
pub use ids::{id_filter, ids_filter, uuid_as_string};

pub use mongodb::{Client, Collection, Database};
