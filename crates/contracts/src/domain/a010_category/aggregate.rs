use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{push_error, EntitySchema, FieldErrorMap, FieldMetadata, SLUG_PATTERN};

record_id!(
    /// Уникальный идентификатор категории каталога
    CategoryId
);

/// Категория каталога (дерево через parent_id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: Option<CategoryId>,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<CategoryId>,
    pub description: String,
    pub is_active: bool,
    pub display_order: i32,
}

impl Default for Category {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            parent_id: None,
            description: String::new(),
            is_active: true,
            display_order: 0,
        }
    }
}

pub static CATEGORY_SCHEMA: EntitySchema = EntitySchema {
    entity: "category",
    fields: &[
        FieldMetadata::text("name", "Name").required().max_length(80),
        FieldMetadata::text("slug", "Slug")
            .required()
            .pattern(SLUG_PATTERN, "Slug may contain lowercase letters, digits and dashes"),
        FieldMetadata::reference("parentId", "Parent category"),
        FieldMetadata::text("description", "Description").max_length(500),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::integer("displayOrder", "Display order").min(0.0),
    ],
};

impl Record for Category {
    type Id = CategoryId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn check_invariants(&self, errors: &mut FieldErrorMap) {
        if self.id.is_some() && self.parent_id == self.id {
            push_error(errors, "parentId", "A category cannot be its own parent");
        }
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }

    fn schema() -> &'static EntitySchema {
        &CATEGORY_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "slug", "description"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::asc("displayOrder"))
    }
}
