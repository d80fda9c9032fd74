//! Entity schema and the validator that checks candidate records against it

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use super::field_type::FieldType;
use super::types::FieldMetadata;

/// Ошибки по полям: имя поля -> первое сообщение
pub type FieldErrorMap = BTreeMap<String, String>;

/// Declarative description of one record type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub fields: &'static [FieldMetadata],
}

/// Результат валидации кандидата
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: FieldErrorMap,
}

impl ValidationResult {
    pub fn from_errors(errors: FieldErrorMap) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Add an error unless the field already carries one
pub fn push_error(errors: &mut FieldErrorMap, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_insert_with(|| message.into());
}

impl EntitySchema {
    /// Find field metadata by wire name
    pub fn field(&self, name: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a candidate (JSON object) against every declared field
    ///
    /// Fields absent from the object are treated as null.
    pub fn validate(&self, candidate: &Value) -> ValidationResult {
        let mut errors = FieldErrorMap::new();

        let Some(object) = candidate.as_object() else {
            push_error(&mut errors, "_record", "Record must be an object");
            return ValidationResult::from_errors(errors);
        };

        for field in self.fields {
            let value = object.get(field.name).unwrap_or(&Value::Null);
            if let Err(message) = validate_field(field, value) {
                push_error(&mut errors, field.name, message);
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Every declared pattern compiles (schema self-check)
    pub fn check_patterns(&self) -> Result<(), String> {
        for field in self.fields {
            if let Some(pattern) = field.validation.pattern {
                Regex::new(pattern)
                    .map_err(|e| format!("{}.{}: {}", self.entity, field.name, e))?;
            }
        }
        Ok(())
    }
}

fn validate_field(field: &FieldMetadata, value: &Value) -> Result<(), String> {
    let rules = &field.validation;
    let label = field.label;

    if value.is_null() {
        return if rules.required {
            Err(format!("{} is required", label))
        } else {
            Ok(())
        };
    }

    match field.field_type {
        FieldType::Text | FieldType::Reference => {
            let text = value
                .as_str()
                .ok_or_else(|| format!("{} must be text", label))?;
            let trimmed = text.trim();

            if trimmed.is_empty() {
                return if rules.required {
                    Err(format!("{} is required", label))
                } else {
                    Ok(())
                };
            }

            rules.check_length(trimmed, label)?;

            if let Some(values) = field.enum_values {
                if !values.contains(&trimmed) {
                    return Err(format!("{} must be one of: {}", label, values.join(", ")));
                }
            }

            if let Some(pattern) = rules.pattern {
                let regex = compiled(pattern)
                    .ok_or_else(|| format!("{} has an invalid pattern", label))?;
                if !regex.is_match(trimmed) {
                    return Err(rules.pattern_error(label));
                }
            }

            Ok(())
        }
        FieldType::Integer => {
            let number = value
                .as_i64()
                .ok_or_else(|| format!("{} must be a whole number", label))?;
            rules.check_range(number as f64, label)
        }
        FieldType::Decimal => {
            let number = value
                .as_f64()
                .ok_or_else(|| format!("{} must be a number", label))?;
            rules.check_range(number, label)
        }
        FieldType::Boolean => {
            if value.is_boolean() {
                Ok(())
            } else {
                Err(format!("{} must be true or false", label))
            }
        }
        FieldType::Timestamp => {
            let text = value
                .as_str()
                .ok_or_else(|| format!("{} must be a date", label))?;
            chrono::DateTime::parse_from_rfc3339(text)
                .map(|_| ())
                .map_err(|_| format!("{} must be a date", label))
        }
        FieldType::List => {
            let items = value
                .as_array()
                .ok_or_else(|| format!("{} must be a list", label))?;
            if rules.required && items.is_empty() {
                return Err(format!("{} is required", label));
            }
            rules.check_count(items.len(), label)
        }
    }
}

static REGEX_CACHE: Lazy<Mutex<HashMap<&'static str, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Compiled regex for a static pattern, cached for the process lifetime
fn compiled(pattern: &'static str) -> Option<Regex> {
    let mut cache = REGEX_CACHE
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    if let Some(regex) = cache.get(pattern) {
        return Some(regex.clone());
    }

    let regex = Regex::new(pattern).ok()?;
    cache.insert(pattern, regex.clone());
    Some(regex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::EMAIL_PATTERN;
    use serde_json::json;

    static SCHEMA: EntitySchema = EntitySchema {
        entity: "sample",
        fields: &[
            FieldMetadata::text("name", "Name").required().max_length(10),
            FieldMetadata::text("email", "Email").pattern(EMAIL_PATTERN, "Enter a valid email"),
            FieldMetadata::text("status", "Status").one_of(&["active", "inactive"]),
            FieldMetadata::integer("months", "Months").min(1.0).max(120.0),
            FieldMetadata::list("tags", "Tags").required(),
            FieldMetadata::timestamp("dateCreated", "Created"),
        ],
    };

    #[test]
    fn test_valid_candidate_has_no_errors() {
        let result = SCHEMA.validate(&json!({
            "name": "Basic",
            "email": "a@b.co",
            "status": "active",
            "months": 12,
            "tags": ["x"],
            "dateCreated": "2024-01-01T00:00:00Z"
        }));
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_required_fields_are_reported() {
        let result = SCHEMA.validate(&json!({ "name": "   ", "tags": [] }));
        assert!(!result.valid);
        assert_eq!(result.errors.get("name").unwrap(), "Name is required");
        assert_eq!(result.errors.get("tags").unwrap(), "Tags is required");
        assert!(!result.errors.contains_key("email"));
        assert!(!result.errors.contains_key("months"));
    }

    #[test]
    fn test_pattern_enum_and_range() {
        let result = SCHEMA.validate(&json!({
            "name": "ok",
            "email": "not-an-email",
            "status": "archived",
            "months": 0,
            "tags": ["x"]
        }));
        assert_eq!(result.errors.get("email").unwrap(), "Enter a valid email");
        assert_eq!(
            result.errors.get("status").unwrap(),
            "Status must be one of: active, inactive"
        );
        assert_eq!(result.errors.get("months").unwrap(), "Months must be at least 1");
    }

    #[test]
    fn test_wrong_kind_and_bad_timestamp() {
        let result = SCHEMA.validate(&json!({
            "name": 5,
            "months": 1.5,
            "tags": ["x"],
            "dateCreated": "yesterday"
        }));
        assert_eq!(result.errors.get("name").unwrap(), "Name must be text");
        assert_eq!(result.errors.get("months").unwrap(), "Months must be a whole number");
        assert_eq!(result.errors.get("dateCreated").unwrap(), "Created must be a date");
    }

    #[test]
    fn test_non_object_candidate() {
        let result = SCHEMA.validate(&json!([1, 2]));
        assert!(!result.valid);
        assert!(result.errors.contains_key("_record"));
    }

    #[test]
    fn test_first_error_wins() {
        let mut errors = FieldErrorMap::new();
        push_error(&mut errors, "name", "first");
        push_error(&mut errors, "name", "second");
        assert_eq!(errors.get("name").unwrap(), "first");
    }
}
