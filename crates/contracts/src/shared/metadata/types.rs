//! Core schema types for records
//!
//! All types use 'static lifetimes so schemas are compile-time constants.

use serde::Serialize;

use super::field_type::FieldType;
use super::validation::ValidationRules;

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    /// Имя поля на проводе (camelCase, совпадает с serde)
    pub name: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub validation: ValidationRules,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<&'static [&'static str]>,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label,
            field_type,
            validation: ValidationRules::none(),
            enum_values: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Integer)
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Decimal)
    }

    pub const fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Boolean)
    }

    pub const fn timestamp(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Timestamp)
    }

    pub const fn list(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::List)
    }

    pub const fn reference(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Reference)
    }

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    pub const fn max(mut self, max: f64) -> Self {
        self.validation.max = Some(max);
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.validation.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub const fn pattern(mut self, pattern: &'static str, error: &'static str) -> Self {
        self.validation.pattern = Some(pattern);
        self.validation.custom_error = Some(error);
        self
    }

    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.enum_values = Some(values);
        self
    }
}

// ============================================================================
// Common patterns
// ============================================================================

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";
pub const URL_PATTERN: &str = r"^https?://[^\s]+$";
