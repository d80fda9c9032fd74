use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{EntitySchema, FieldMetadata, SLUG_PATTERN, URL_PATTERN};

record_id!(
    /// Уникальный идентификатор бренда
    BrandId
);

/// Бренд товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub id: Option<BrandId>,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub logo_url: String,
    pub is_active: bool,
    pub date_created: Option<DateTime<Utc>>,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            logo_url: String::new(),
            is_active: true,
            date_created: None,
        }
    }
}

/// Slug из названия: латиница и цифры, остальное заменяется дефисами
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub static BRAND_SCHEMA: EntitySchema = EntitySchema {
    entity: "brand",
    fields: &[
        FieldMetadata::text("name", "Name").required().max_length(80),
        FieldMetadata::text("slug", "Slug")
            .required()
            .pattern(SLUG_PATTERN, "Slug may contain lowercase letters, digits and dashes"),
        FieldMetadata::text("description", "Description").max_length(500),
        FieldMetadata::text("logoUrl", "Logo URL").pattern(URL_PATTERN, "Enter an http(s) URL"),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::timestamp("dateCreated", "Created"),
    ],
};

impl Record for Brand {
    type Id = BrandId;

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
        "a009"
    }

    fn collection_name() -> &'static str {
        "brand"
    }

    fn element_name() -> &'static str {
        "Brand"
    }

    fn list_name() -> &'static str {
        "Brands"
    }

    fn schema() -> &'static EntitySchema {
        &BRAND_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "slug"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("dateCreated"))
    }
}
