//! Validation rules for schema fields

use serde::Serialize;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ValidationRules {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    /// Length limits for a string value (counted in characters, not bytes)
    pub fn check_length(&self, value: &str, label: &str) -> Result<(), String> {
        let len = value.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must be at most {} characters", label, max));
            }
        }

        Ok(())
    }

    /// Item count limits for a list value
    pub fn check_count(&self, count: usize, label: &str) -> Result<(), String> {
        if let Some(min) = self.min_length {
            if count < min {
                return Err(format!("{} must contain at least {} item(s)", label, min));
            }
        }

        if let Some(max) = self.max_length {
            if count > max {
                return Err(format!("{} must contain at most {} item(s)", label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn check_range(&self, value: f64, label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", label, max));
            }
        }

        Ok(())
    }

    /// Message used when the pattern does not match
    pub fn pattern_error(&self, label: &str) -> String {
        match self.custom_error {
            Some(message) => message.to_string(),
            None => format!("{} is not valid", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars() {
        let mut rules = ValidationRules::none();
        rules.max_length = Some(6);
        assert!(rules.check_length("привет", "Name").is_ok());
        assert!(rules.check_length("привет!", "Name").is_err());
    }

    #[test]
    fn test_range() {
        let mut rules = ValidationRules::required();
        rules.min = Some(0.0);
        rules.max = Some(100.0);
        assert!(rules.check_range(100.0, "Rate").is_ok());
        assert_eq!(
            rules.check_range(-1.0, "Rate").unwrap_err(),
            "Rate must be at least 0"
        );
    }
}
