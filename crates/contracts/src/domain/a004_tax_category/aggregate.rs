use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{EntitySchema, FieldMetadata};

record_id!(
    /// Уникальный идентификатор налоговой категории
    TaxCategoryId
);

/// Налоговая категория (ставка GST и код HSN)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxCategory {
    pub id: Option<TaxCategoryId>,
    pub name: String,
    /// Ставка в процентах
    pub rate: f64,
    pub hsn_code: String,
    pub description: String,
    pub is_active: bool,
    pub date_created: Option<DateTime<Utc>>,
}

impl Default for TaxCategory {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            rate: 0.0,
            hsn_code: String::new(),
            description: String::new(),
            is_active: true,
            date_created: None,
        }
    }
}

pub static TAX_CATEGORY_SCHEMA: EntitySchema = EntitySchema {
    entity: "tax_category",
    fields: &[
        FieldMetadata::text("name", "Name").required().max_length(80),
        FieldMetadata::decimal("rate", "Rate (%)").required().min(0.0).max(100.0),
        FieldMetadata::text("hsnCode", "HSN code")
            .pattern(r"^[0-9]{4,8}$", "HSN code must be 4 to 8 digits"),
        FieldMetadata::text("description", "Description").max_length(300),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::timestamp("dateCreated", "Created"),
    ],
};

impl Record for TaxCategory {
    type Id = TaxCategoryId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "tax_category"
    }

    fn element_name() -> &'static str {
        "Tax category"
    }

    fn list_name() -> &'static str {
        "Tax categories"
    }

    fn schema() -> &'static EntitySchema {
        &TAX_CATEGORY_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "hsnCode", "rate"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("dateCreated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_and_hsn() {
        let mut tax = TaxCategory {
            name: "GST 18%".into(),
            rate: 118.0,
            hsn_code: "12a".into(),
            ..Default::default()
        };
        let errors = tax.validate().errors;
        assert_eq!(errors.get("rate").unwrap(), "Rate (%) must be at most 100");
        assert_eq!(errors.get("hsnCode").unwrap(), "HSN code must be 4 to 8 digits");

        tax.rate = 18.0;
        tax.hsn_code = "6109".into();
        assert!(tax.validate().valid);
    }
}
