use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{push_error, EntitySchema, FieldErrorMap, FieldMetadata, EMAIL_PATTERN};

// ============================================================================
// ID Type
// ============================================================================

record_id!(
    /// Уникальный идентификатор покупателя
    CustomerId
);

// ============================================================================
// Record
// ============================================================================

/// Типы регистрации GST
pub const GST_TYPES: &[&str] = &["regular", "composition", "unregistered", "consumer"];

/// Покупатель магазина (B2B или розничный)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gst_type: String,
    pub gst_number: String,

    // Адрес
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,

    pub is_active: bool,
    pub date_created: Option<DateTime<Utc>>,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            gst_type: String::new(),
            gst_number: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            country: "India".into(),
            is_active: true,
            date_created: None,
        }
    }
}

impl Customer {
    /// Требует ли тип регистрации номер GSTIN
    pub fn requires_gst_number(&self) -> bool {
        matches!(self.gst_type.trim(), "regular" | "composition")
    }
}

pub static CUSTOMER_SCHEMA: EntitySchema = EntitySchema {
    entity: "customer",
    fields: &[
        FieldMetadata::text("name", "Name").required().max_length(120),
        FieldMetadata::text("phone", "Phone")
            .required()
            .pattern(r"^\+?[0-9]{10,15}$", "Phone must contain 10 to 15 digits"),
        FieldMetadata::text("email", "Email").pattern(EMAIL_PATTERN, "Enter a valid email address"),
        FieldMetadata::text("gstType", "GST type").one_of(GST_TYPES),
        FieldMetadata::text("gstNumber", "GST number").pattern(
            r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$",
            "Enter a valid 15-character GSTIN",
        ),
        FieldMetadata::text("street", "Street").max_length(200),
        FieldMetadata::text("city", "City").max_length(80),
        FieldMetadata::text("state", "State").max_length(80),
        FieldMetadata::text("pincode", "Pincode")
            .pattern(r"^[1-9][0-9]{5}$", "Pincode must be 6 digits"),
        FieldMetadata::text("country", "Country").max_length(80),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::timestamp("dateCreated", "Created"),
    ],
};

impl Record for Customer {
    type Id = CustomerId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.date_created.get_or_insert(at);
    }

    fn check_invariants(&self, errors: &mut FieldErrorMap) {
        if self.requires_gst_number() && self.gst_number.trim().is_empty() {
            push_error(errors, "gstNumber", "GST number is required for registered businesses");
        }
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn schema() -> &'static EntitySchema {
        &CUSTOMER_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "phone", "email", "city"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("dateCreated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            name: "Asha Traders".into(),
            phone: "+919812345678".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_customer_is_valid() {
        let result = customer().validate();
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn test_pincode_and_phone_patterns() {
        let mut c = customer();
        c.pincode = "012345".into();
        c.phone = "12-34".into();
        let errors = c.validate().errors;
        assert_eq!(errors.get("pincode").unwrap(), "Pincode must be 6 digits");
        assert_eq!(errors.get("phone").unwrap(), "Phone must contain 10 to 15 digits");
    }

    #[test]
    fn test_registered_gst_needs_number() {
        let mut c = customer();
        c.gst_type = "regular".into();
        assert!(c.validate().errors.contains_key("gstNumber"));

        c.gst_number = "27AAPFU0939F1ZV".into();
        assert!(c.validate().valid);

        c.gst_type = "wholesale".into();
        assert!(c.validate().errors.contains_key("gstType"));
    }
}
