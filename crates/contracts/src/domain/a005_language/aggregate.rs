use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{push_error, EntitySchema, FieldErrorMap, FieldMetadata};

record_id!(
    /// Уникальный идентификатор языка витрины
    LanguageId
);

/// Язык витрины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: Option<LanguageId>,
    pub name: String,
    /// Код локали: `en` или `en-IN`
    pub code: String,
    pub is_default: bool,
    pub is_active: bool,
    pub display_order: i32,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            code: String::new(),
            is_default: false,
            is_active: true,
            display_order: 0,
        }
    }
}

pub static LANGUAGE_SCHEMA: EntitySchema = EntitySchema {
    entity: "language",
    fields: &[
        FieldMetadata::text("name", "Name").required().max_length(60),
        FieldMetadata::text("code", "Code")
            .required()
            .pattern(r"^[a-z]{2}(-[A-Z]{2})?$", "Use a locale code like en or en-IN"),
        FieldMetadata::boolean("isDefault", "Default"),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::integer("displayOrder", "Display order").min(0.0),
    ],
};

impl Record for Language {
    type Id = LanguageId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn check_invariants(&self, errors: &mut FieldErrorMap) {
        if self.is_default && !self.is_active {
            push_error(errors, "isActive", "The default language must be active");
        }
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "language"
    }

    fn element_name() -> &'static str {
        "Language"
    }

    fn list_name() -> &'static str {
        "Languages"
    }

    fn schema() -> &'static EntitySchema {
        &LANGUAGE_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "code"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::asc("displayOrder"))
    }
}
