use axum_helpers::schema::{SchemaField, TextRule};
use chrono::{DateTime, Utc};
use domain_departments::Department;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const FIRST_NAME_RULE: TextRule = TextRule::required("firstName");
pub const LAST_NAME_RULE: TextRule = TextRule::required("lastName");
pub const DEPARTMENT_RULE: TextRule = TextRule::required("department");

fn validate_first_name(value: &SchemaField) -> Result<(), ValidationError> {
    FIRST_NAME_RULE.check(value)
}

fn validate_last_name(value: &SchemaField) -> Result<(), ValidationError> {
    LAST_NAME_RULE.check(value)
}

fn validate_department(value: &SchemaField) -> Result<(), ValidationError> {
    DEPARTMENT_RULE.check(value)
}

fn validate_first_name_update(value: &SchemaField) -> Result<(), ValidationError> {
    FIRST_NAME_RULE.check_partial(value)
}

fn validate_last_name_update(value: &SchemaField) -> Result<(), ValidationError> {
    LAST_NAME_RULE.check_partial(value)
}

fn validate_department_update(value: &SchemaField) -> Result<(), ValidationError> {
    DEPARTMENT_RULE.check_partial(value)
}

/// Employee entity - stored in the `employees` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id", with = "database::mongodb::uuid_as_string")]
    pub id: Uuid,
    #[serde(rename = "firstName")]
    #[schema(example = "John")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Department ID or free-text department name
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The `department` field of an employee as returned by read endpoints
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum DepartmentRef {
    /// The referenced department record
    Populated(Department),
    /// Stored value that does not resolve to a department
    Raw(String),
}

/// Employee with its department reference resolved
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PopulatedEmployee {
    #[serde(rename = "_id", with = "database::mongodb::uuid_as_string")]
    pub id: Uuid,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub department: DepartmentRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating an employee
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[serde(rename = "firstName")]
    #[serde(default)]
    #[validate(custom(function = "validate_first_name"))]
    #[schema(value_type = String, min_length = 1, example = "John")]
    pub first_name: SchemaField,
    #[serde(rename = "lastName")]
    #[serde(default)]
    #[validate(custom(function = "validate_last_name"))]
    #[schema(value_type = String, min_length = 1, example = "Doe")]
    pub last_name: SchemaField,
    #[serde(default)]
    #[validate(custom(function = "validate_department"))]
    #[schema(value_type = String, min_length = 1)]
    pub department: SchemaField,
}

/// DTO for updating an employee; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployee {
    #[serde(rename = "firstName")]
    #[serde(default)]
    #[validate(custom(function = "validate_first_name_update"))]
    #[schema(value_type = Option<String>, min_length = 1)]
    pub first_name: SchemaField,
    #[serde(rename = "lastName")]
    #[serde(default)]
    #[validate(custom(function = "validate_last_name_update"))]
    #[schema(value_type = Option<String>, min_length = 1)]
    pub last_name: SchemaField,
    #[serde(default)]
    #[validate(custom(function = "validate_department_update"))]
    #[schema(value_type = Option<String>, min_length = 1)]
    pub department: SchemaField,
}

/// Equality filters for listing employees
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Stored department value (ID or free text)
    pub department: Option<String>,
    /// Maximum number of results (all when omitted)
    pub limit: Option<u64>,
    /// Number of results to skip
    pub offset: Option<u64>,
}

impl Employee {
    /// Build a new employee from a validated CreateEmployee DTO
    pub fn new(input: CreateEmployee) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            first_name: input.first_name.into_text().unwrap_or_default(),
            last_name: input.last_name.into_text().unwrap_or_default(),
            department: input.department.into_text().unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The department reference, when it is a department ID
    pub fn department_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.department).ok()
    }

    /// Replace the department reference with the record from `departments`, if present
    pub fn populate(self, departments: &HashMap<Uuid, Department>) -> PopulatedEmployee {
        let department = self
            .department_id()
            .and_then(|id| departments.get(&id).cloned())
            .map(DepartmentRef::Populated)
            .unwrap_or(DepartmentRef::Raw(self.department));

        PopulatedEmployee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            department,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl CreateEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            first_name: SchemaField::Text(first_name.into()),
            last_name: SchemaField::Text(last_name.into()),
            department: SchemaField::Text(department.into()),
        }
    }
}

impl UpdateEmployee {
    pub fn with_first_name(first_name: impl Into<String>) -> Self {
        Self {
            first_name: SchemaField::Text(first_name.into()),
            ..Default::default()
        }
    }

    pub fn with_department(department: impl Into<String>) -> Self {
        Self {
            department: SchemaField::Text(department.into()),
            ..Default::default()
        }
    }
}
