use axum_helpers::schema::{SchemaField, TextRule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// `name`: required, 2 to 20 characters.
pub const NAME_RULE: TextRule = TextRule::required("name").with_length(2, 20);

fn validate_name(value: &SchemaField) -> Result<(), ValidationError> {
    NAME_RULE.check(value)
}

fn validate_name_update(value: &SchemaField) -> Result<(), ValidationError> {
    NAME_RULE.check_partial(value)
}

/// Department entity - stored in the `departments` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id", with = "database::mongodb::uuid_as_string")]
    pub id: Uuid,
    #[schema(example = "Management")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a department
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateDepartment {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    #[schema(value_type = String, min_length = 2, max_length = 20, example = "Management")]
    pub name: SchemaField,
}

/// DTO for updating a department; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateDepartment {
    #[serde(default)]
    #[validate(custom(function = "validate_name_update"))]
    #[schema(value_type = Option<String>, min_length = 2, max_length = 20)]
    pub name: SchemaField,
}

/// Equality filters for listing departments
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DepartmentFilter {
    /// Exact department name
    pub name: Option<String>,
    /// Maximum number of results (all when omitted)
    pub limit: Option<u64>,
    /// Number of results to skip
    pub offset: Option<u64>,
}

impl Department {
    /// Build a new department from a validated CreateDepartment DTO
    pub fn new(input: CreateDepartment) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name.into_text().unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl CreateDepartment {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: SchemaField::Text(name.into()),
        }
    }
}

impl UpdateDepartment {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: SchemaField::Text(name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_missing()
    }
}
