use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{EntitySchema, FieldMetadata};

// ============================================================================
// ID Type
// ============================================================================

record_id!(
    /// Уникальный идентификатор гарантии
    WarrantyId
);

// ============================================================================
// Record
// ============================================================================

/// Гарантийные условия, которые можно привязать к товару
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Warranty {
    pub id: Option<WarrantyId>,
    pub name: String,
    pub duration_months: i32,
    pub description: String,
    pub is_active: bool,
    pub date_created: Option<DateTime<Utc>>,
}

impl Default for Warranty {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            duration_months: 0,
            description: String::new(),
            is_active: true,
            date_created: None,
        }
    }
}

pub static WARRANTY_SCHEMA: EntitySchema = EntitySchema {
    entity: "warranty",
    fields: &[
        FieldMetadata::text("name", "Name").required().max_length(100),
        FieldMetadata::integer("durationMonths", "Duration (months)")
            .required()
            .min(1.0)
            .max(120.0),
        FieldMetadata::text("description", "Description").max_length(500),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::timestamp("dateCreated", "Created"),
    ],
};

impl Record for Warranty {
    type Id = WarrantyId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.date_created.get_or_insert(at);
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "warranty"
    }

    fn element_name() -> &'static str {
        "Warranty"
    }

    fn list_name() -> &'static str {
        "Warranties"
    }

    fn schema() -> &'static EntitySchema {
        &WARRANTY_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "description"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("dateCreated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_bounds() {
        let mut warranty = Warranty {
            name: "Lifetime".into(),
            duration_months: 121,
            ..Default::default()
        };
        assert_eq!(
            warranty.validate().errors.get("durationMonths").unwrap(),
            "Duration (months) must be at most 120"
        );

        warranty.duration_months = 120;
        assert!(warranty.validate().valid);
    }
}
