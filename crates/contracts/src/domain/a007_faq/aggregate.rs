use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{EntitySchema, FieldMetadata};

record_id!(
    /// Уникальный идентификатор вопроса FAQ
    FaqId
);

/// Вопрос-ответ для страницы FAQ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Faq {
    pub id: Option<FaqId>,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_active: bool,
    pub display_order: i32,
}

impl Default for Faq {
    fn default() -> Self {
        Self {
            id: None,
            question: String::new(),
            answer: String::new(),
            category: String::new(),
            is_active: true,
            display_order: 0,
        }
    }
}

pub static FAQ_SCHEMA: EntitySchema = EntitySchema {
    entity: "faq",
    fields: &[
        FieldMetadata::text("question", "Question").required().max_length(300),
        FieldMetadata::text("answer", "Answer").required().max_length(2000),
        FieldMetadata::text("category", "Category").max_length(60),
        FieldMetadata::boolean("isActive", "Active"),
        FieldMetadata::integer("displayOrder", "Display order").min(0.0),
    ],
};

impl Record for Faq {
    type Id = FaqId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "faq"
    }

    fn element_name() -> &'static str {
        "FAQ"
    }

    fn list_name() -> &'static str {
        "FAQs"
    }

    fn schema() -> &'static EntitySchema {
        &FAQ_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["question", "answer", "category"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::asc("displayOrder"))
    }
}
