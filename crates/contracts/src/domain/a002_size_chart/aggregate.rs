use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{push_error, EntitySchema, FieldErrorMap, FieldMetadata};

// ============================================================================
// ID Type
// ============================================================================

record_id!(
    /// Уникальный идентификатор размерной сетки
    SizeChartId
);

// ============================================================================
// Record
// ============================================================================

pub const SIZE_UNITS: &[&str] = &["cm", "inch"];

/// Ячейка таблицы размеров
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeChartCell {
    pub value: String,
}

impl SizeChartCell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Строка таблицы размеров: ровно одна ячейка на колонку
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeChartRow {
    pub cells: Vec<SizeChartCell>,
}

impl SizeChartRow {
    pub fn empty(width: usize) -> Self {
        Self {
            cells: vec![SizeChartCell::default(); width],
        }
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: values.into_iter().map(SizeChartCell::new).collect(),
        }
    }
}

/// Размерная сетка с произвольным набором колонок
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SizeChart {
    pub id: Option<SizeChartId>,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub columns: Vec<String>,
    pub rows: Vec<SizeChartRow>,
    pub is_active: bool,
    pub date_created: Option<DateTime<Utc>>,
}

impl Default for SizeChart {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: String::new(),
            unit: "cm".into(),
            columns: vec!["Size".into()],
            rows: Vec::new(),
            is_active: true,
            date_created: None,
        }
    }
}

pub static SIZE_CHART_SCHEMA: EntitySchema = EntitySchema {
    entity: "size_chart",
    fields: &[
        FieldMetadata::text("name", "Name").required().max_length(100),
        FieldMetadata::text("category", "Category").max_length(80),
        FieldMetadata::text("unit", "Unit").required().one_of(SIZE_UNITS),
        FieldMetadata::list("columns", "Columns").required().max_length(20),
        FieldMetadata::list("rows", "Rows").max_length(100),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::timestamp("dateCreated", "Created"),
    ],
};

impl Record for SizeChart {
    type Id = SizeChartId;

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
        let mut seen = HashSet::new();
        for column in &self.columns {
            let key = column.trim().to_lowercase();
            if key.is_empty() {
                push_error(errors, "columns", "Column names cannot be empty");
            } else if !seen.insert(key) {
                push_error(errors, "columns", format!("Duplicate column: {}", column.trim()));
            }
        }

        for (index, row) in self.rows.iter().enumerate() {
            if row.cells.len() != self.columns.len() {
                push_error(
                    errors,
                    "rows",
                    format!(
                        "Row {} has {} cells, expected {}",
                        index + 1,
                        row.cells.len(),
                        self.columns.len()
                    ),
                );
            }
        }
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "size_chart"
    }

    fn element_name() -> &'static str {
        "Size chart"
    }

    fn list_name() -> &'static str {
        "Size charts"
    }

    fn schema() -> &'static EntitySchema {
        &SIZE_CHART_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "category"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("dateCreated"))
    }
}
