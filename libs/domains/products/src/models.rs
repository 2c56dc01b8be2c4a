use axum_helpers::schema::{SchemaField, TextRule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const NAME_RULE: TextRule = TextRule::required("name");
pub const CLIENT_RULE: TextRule = TextRule::required("client");

fn validate_name(value: &SchemaField) -> Result<(), ValidationError> {
    NAME_RULE.check(value)
}

fn validate_client(value: &SchemaField) -> Result<(), ValidationError> {
    CLIENT_RULE.check(value)
}

fn validate_name_update(value: &SchemaField) -> Result<(), ValidationError> {
    NAME_RULE.check_partial(value)
}

fn validate_client_update(value: &SchemaField) -> Result<(), ValidationError> {
    CLIENT_RULE.check_partial(value)
}

/// Product entity - stored in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id", with = "database::mongodb::uuid_as_string")]
    pub id: Uuid,
    #[schema(example = "Shampoo")]
    pub name: String,
    /// Client the product is made for
    #[schema(example = "Acme Corp")]
    pub client: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    #[schema(value_type = String, min_length = 1, example = "Shampoo")]
    pub name: SchemaField,
    #[serde(default)]
    #[validate(custom(function = "validate_client"))]
    #[schema(value_type = String, min_length = 1, example = "Acme Corp")]
    pub client: SchemaField,
}

/// DTO for updating a product; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[serde(default)]
    #[validate(custom(function = "validate_name_update"))]
    #[schema(value_type = Option<String>, min_length = 1)]
    pub name: SchemaField,
    #[serde(default)]
    #[validate(custom(function = "validate_client_update"))]
    #[schema(value_type = Option<String>, min_length = 1)]
    pub client: SchemaField,
}

/// Equality filters for listing products
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub client: Option<String>,
    /// Maximum number of results (all when omitted)
    pub limit: Option<u64>,
    /// Number of results to skip
    pub offset: Option<u64>,
}

impl Product {
    /// Build a new product from a validated CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name.into_text().unwrap_or_default(),
            client: input.client.into_text().unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl CreateProduct {
    pub fn new(name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            name: SchemaField::Text(name.into()),
            client: SchemaField::Text(client.into()),
        }
    }
}

impl UpdateProduct {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: SchemaField::Text(name.into()),
            ..Default::default()
        }
    }

    pub fn with_client(client: impl Into<String>) -> Self {
        Self {
            client: SchemaField::Text(client.into()),
            ..Default::default()
        }
    }
}
