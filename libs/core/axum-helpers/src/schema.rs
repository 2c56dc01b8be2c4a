//! Schema-style field rules for JSON request bodies.
//!
//! A [`SchemaField`] captures whatever the client sent for a string field,
//! including wrong JSON types, so that type mistakes surface as field-level
//! validation errors instead of a body parse failure. [`TextRule`] checks a
//! field from a `validator` custom function.
//!
//! ```rust
//! use axum_helpers::schema::{SchemaField, TextRule};
//!
//! const NAME: TextRule = TextRule::required("name").with_length(2, 20);
//!
//! assert!(NAME.check(&SchemaField::from("Management")).is_ok());
//! assert!(NAME.check(&SchemaField::Missing).is_err());
//! assert!(NAME.check_partial(&SchemaField::Missing).is_ok());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use validator::ValidationError;

/// Raw state of a string field in a request body.
///
/// Use with `#[serde(default)]` so an absent key becomes [`SchemaField::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SchemaField {
    #[default]
    Missing,
    Null,
    Text(String),
    /// A non-string JSON value; holds the JSON type name.
    Invalid(&'static str),
}

impl SchemaField {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The supplied text, if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for SchemaField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SchemaField {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Serialized as supplied: text as a string, an absent or null field as
/// null, a wrong-typed value as its JSON type name.
impl Serialize for SchemaField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Missing | Self::Null => serializer.serialize_none(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Invalid(kind) => serializer.serialize_str(kind),
        }
    }
}

impl<'de> Deserialize<'de> for SchemaField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self::Null,
            Value::String(text) => Self::Text(text),
            Value::Bool(_) => Self::Invalid("boolean"),
            Value::Number(_) => Self::Invalid("number"),
            Value::Array(_) => Self::Invalid("array"),
            Value::Object(_) => Self::Invalid("object"),
        })
    }
}

/// Constraint on a required string field.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    pub field: &'static str,
    pub min: usize,
    pub max: Option<usize>,
}

impl TextRule {
    /// A required, non-empty string.
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            min: 1,
            max: None,
        }
    }

    pub const fn with_length(mut self, min: usize, max: usize) -> Self {
        self.min = min;
        self.max = Some(max);
        self
    }

    /// Full check, used when creating a record.
    pub fn check(&self, value: &SchemaField) -> Result<(), ValidationError> {
        match value {
            SchemaField::Missing | SchemaField::Null => Err(self.required_error()),
            SchemaField::Invalid(kind) => Err(self.type_error(kind)),
            SchemaField::Text(text) if text.is_empty() => Err(self.required_error()),
            SchemaField::Text(text) => self.check_length(text),
        }
    }

    /// Partial-update check: an absent field is left unchanged.
    pub fn check_partial(&self, value: &SchemaField) -> Result<(), ValidationError> {
        if value.is_missing() {
            return Ok(());
        }
        self.check(value)
    }

    fn check_length(&self, text: &str) -> Result<(), ValidationError> {
        let len = text.chars().count();
        let too_long = self.max.is_some_and(|max| len > max);
        if len >= self.min && !too_long {
            return Ok(());
        }

        let message = match self.max {
            Some(max) => format!(
                "{} must be between {} and {} characters",
                self.field, self.min, max
            ),
            None => format!("{} must be at least {} characters", self.field, self.min),
        };
        let mut err = ValidationError::new("length").with_message(Cow::Owned(message));
        err.add_param(Cow::Borrowed("min"), &self.min);
        if let Some(max) = self.max {
            err.add_param(Cow::Borrowed("max"), &max);
        }
        err.add_param(Cow::Borrowed("value"), &text);
        Err(err)
    }

    fn required_error(&self) -> ValidationError {
        ValidationError::new("required").with_message(Cow::Owned(format!(
            "{} is required",
            self.field
        )))
    }

    fn type_error(&self, kind: &str) -> ValidationError {
        let mut err = ValidationError::new("type").with_message(Cow::Owned(format!(
            "{} must be a string",
            self.field
        )));
        err.add_param(Cow::Borrowed("found"), &kind);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use validator::Validate;

    const NAME: TextRule = TextRule::required("name").with_length(2, 20);
    const CLIENT: TextRule = TextRule::required("client");

    fn check_name(value: &SchemaField) -> Result<(), ValidationError> {
        NAME.check(value)
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Body {
        #[validate(custom(function = "check_name"))]
        #[serde(default)]
        name: SchemaField,
    }

    fn parse(json: &str) -> SchemaField {
        serde_json::from_str::<Body>(json).unwrap().name
    }

    #[test]
    fn test_deserialize_captures_every_json_shape() {
        assert_eq!(parse("{}"), SchemaField::Missing);
        assert_eq!(parse(r#"{"name": null}"#), SchemaField::Null);
        assert_eq!(parse(r#"{"name": "HR"}"#), SchemaField::from("HR"));
        assert_eq!(parse(r#"{"name": {}}"#), SchemaField::Invalid("object"));
        assert_eq!(parse(r#"{"name": []}"#), SchemaField::Invalid("array"));
        assert_eq!(parse(r#"{"name": 7}"#), SchemaField::Invalid("number"));
        assert_eq!(parse(r#"{"name": true}"#), SchemaField::Invalid("boolean"));
    }

    #[test]
    fn test_check_accepts_text_within_bounds() {
        assert!(NAME.check(&"Management".into()).is_ok());
        assert!(NAME.check(&"Human Resources".into()).is_ok());
        assert!(NAME.check(&"IT".into()).is_ok());
        assert!(NAME.check(&"a".repeat(20).into()).is_ok());
    }

    #[test]
    fn test_check_rejects_missing_null_and_empty_as_required() {
        for value in [SchemaField::Missing, SchemaField::Null, "".into()] {
            let err = NAME.check(&value).unwrap_err();
            assert_eq!(err.code, "required");
            assert_eq!(err.message.as_deref(), Some("name is required"));
        }
    }

    #[test]
    fn test_check_rejects_wrong_type() {
        let err = NAME.check(&SchemaField::Invalid("array")).unwrap_err();
        assert_eq!(err.code, "type");
        assert_eq!(err.params["found"], "array");
    }

    #[test]
    fn test_check_rejects_out_of_bounds_length() {
        let err = NAME.check(&"a".into()).unwrap_err();
        assert_eq!(err.code, "length");
        assert_eq!(err.params["min"], 2);
        assert_eq!(err.params["max"], 20);
        assert_eq!(err.params["value"], "a");

        assert!(NAME.check(&"a".repeat(21).into()).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        // 20 two-byte characters
        assert!(NAME.check(&"é".repeat(20).into()).is_ok());
    }

    #[test]
    fn test_required_rule_without_max_accepts_long_text() {
        assert!(CLIENT.check(&"x".repeat(500).into()).is_ok());
        assert_eq!(CLIENT.check(&"".into()).unwrap_err().code, "required");
    }

    #[test]
    fn test_check_partial_skips_missing_only() {
        assert!(NAME.check_partial(&SchemaField::Missing).is_ok());
        assert!(NAME.check_partial(&"Sales".into()).is_ok());
        assert_eq!(
            NAME.check_partial(&SchemaField::Null).unwrap_err().code,
            "required"
        );
        assert_eq!(NAME.check_partial(&"x".into()).unwrap_err().code, "length");
    }

    #[test]
    fn test_into_text() {
        assert_eq!(SchemaField::from("a").into_text(), Some("a".to_string()));
        assert_eq!(SchemaField::Null.into_text(), None);
        assert_eq!(SchemaField::Missing.as_text(), None);
    }

    #[test]
    fn test_serialize_reflects_supplied_value() {
        assert_eq!(serde_json::to_value(SchemaField::from("HR")).unwrap(), json!("HR"));
        assert_eq!(serde_json::to_value(SchemaField::Null).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(SchemaField::Missing).unwrap(), json!(null));
        assert_eq!(
            serde_json::to_value(SchemaField::Invalid("array")).unwrap(),
            json!("array")
        );
    }

    #[test]
    fn test_derived_custom_rule_reports_value_param() {
        let body: Body = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        let errors = body.validate().unwrap_err();
        let err = &errors.field_errors()["name"][0];
        assert_eq!(err.code, "length");
        assert_eq!(err.params["value"], json!("x"));
    }

    #[test]
    fn test_derived_custom_rule_accepts_valid_body() {
        let body: Body = serde_json::from_str(r#"{"name": "Sales"}"#).unwrap();
        assert!(body.validate().is_ok());
    }
}
