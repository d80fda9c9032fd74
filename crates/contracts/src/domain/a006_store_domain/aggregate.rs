use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::record_id;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{EntitySchema, FieldMetadata};

record_id!(
    /// Уникальный идентификатор домена магазина
    StoreDomainId
);

pub const SSL_STATUSES: &[&str] = &["pending", "active", "failed"];

/// Домен, подключённый к витрине
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreDomain {
    pub id: Option<StoreDomainId>,
    pub host: String,
    pub is_primary: bool,
    pub ssl_status: String,
    pub date_created: Option<DateTime<Utc>>,
}

impl Default for StoreDomain {
    fn default() -> Self {
        Self {
            id: None,
            host: String::new(),
            is_primary: false,
            ssl_status: "pending".into(),
            date_created: None,
        }
    }
}

pub static STORE_DOMAIN_SCHEMA: EntitySchema = EntitySchema {
    entity: "domain",
    fields: &[
        FieldMetadata::text("host", "Domain")
            .required()
            .max_length(253)
            .pattern(
                r"^([a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}$",
                "Enter a domain like shop.example.com",
            ),
        FieldMetadata::boolean("isPrimary", "Primary"),
        FieldMetadata::text("sslStatus", "SSL status").required().one_of(SSL_STATUSES),
        FieldMetadata::timestamp("dateCreated", "Created"),
    ],
};

impl Record for StoreDomain {
    type Id = StoreDomainId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "domain"
    }

    fn element_name() -> &'static str {
        "Domain"
    }

    fn list_name() -> &'static str {
        "Domains"
    }

    fn schema() -> &'static EntitySchema {
        &STORE_DOMAIN_SCHEMA
    }

    fn search_fields() -> &'static [&'static str] {
        &["host", "sslStatus"]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("dateCreated"))
    }
}
