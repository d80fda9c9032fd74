use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{push_error, EntitySchema, FieldErrorMap, FieldMetadata};

record_id!(
    /// Уникальный идентификатор правила комиссии
    CommissionRuleId
);

pub const RULE_TYPES: &[&str] = &["percentage", "fixed"];

/// Правило комиссии поставщика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommissionRule {
    pub id: Option<CommissionRuleId>,
    pub name: String,
    pub rule_type: String,
    /// Процент (для percentage) или сумма (для fixed)
    pub value: f64,
    pub category_name: String,
    pub min_order_value: Option<f64>,
    pub is_active: bool,
    pub date_created: Option<DateTime<Utc>>,
}

impl Default for CommissionRule {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            rule_type: "percentage".into(),
            value: 0.0,
            category_name: String::new(),
            min_order_value: None,
            is_active: true,
            date_created: None,
        }
    }
}

impl CommissionRule {
    /// Комиссия с заказа на сумму `order_value`
    pub fn commission_for(&self, order_value: f64) -> f64 {
        if let Some(min) = self.min_order_value {
            if order_value < min {
                return 0.0;
            }
        }
        match self.rule_type.as_str() {
            "percentage" => order_value * self.value / 100.0,
            _ => self.value,
        }
    }
}

pub static COMMISSION_RULE_SCHEMA: EntitySchema = EntitySchema {
    entity: "commission_rule",
    fields: &[
        FieldMetadata::text("name", "Name").required().max_length(100),
        FieldMetadata::text("ruleType", "Rule type").required().one_of(RULE_TYPES),
        FieldMetadata::decimal("value", "Value").required().min(0.0),
        FieldMetadata::text("categoryName", "Category").max_length(80),
        FieldMetadata::decimal("minOrderValue", "Minimum order value").min(0.0),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::timestamp("dateCreated", "Created"),
    ],
};

impl Record for CommissionRule {
    type Id = CommissionRuleId;

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
        if self.rule_type == "percentage" && self.value > 100.0 {
            push_error(errors, "value", "Percentage commission cannot exceed 100");
        }
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "commission_rule"
    }

    fn element_name() -> &'static str {
        "Commission rule"
    }

    fn list_name() -> &'static str {
        "Commission rules"
    }

    fn schema() -> &'static EntitySchema {
        &COMMISSION_RULE_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "categoryName", "ruleType"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("dateCreated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_cap() {
        let mut rule = CommissionRule {
            name: "Electronics".into(),
            value: 150.0,
            ..Default::default()
        };
        assert_eq!(
            rule.validate().errors.get("value").unwrap(),
            "Percentage commission cannot exceed 100"
        );

        rule.rule_type = "fixed".into();
        assert!(rule.validate().valid);
    }

    #[test]
    fn test_commission_for() {
        let rule = CommissionRule {
            name: "Apparel".into(),
            value: 10.0,
            min_order_value: Some(500.0),
            ..Default::default()
        };
        assert_eq!(rule.commission_for(400.0), 0.0);
        assert_eq!(rule.commission_for(1000.0), 100.0);
    }
}
