//! UUID primary keys. `_id` is stored as the hyphenated string form so the
//! same value is produced by the driver's document encoder and by filters.

use mongodb::bson::{Document, doc};
use uuid::Uuid;

/// `{ "_id": "<uuid>" }`
pub fn id_filter(id: Uuid) -> Document {
    doc! { "_id": id.to_string() }
}

/// `{ "_id": { "$in": [...] } }`
pub fn ids_filter(ids: &[Uuid]) -> Document {
    let ids: Vec<String> = ids.iter().map(Uuid::to_string).collect();
    doc! { "_id": { "$in": ids } }
}

/// Serde adapter for `#[serde(with = "database::mongodb::uuid_as_string")]`.
pub mod uuid_as_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Uuid::parse_str(&raw).map_err(serde::de::Error::custom)
    }
}
