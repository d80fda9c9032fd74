//! Field type enumeration for the schema system

use serde::Serialize;

/// Primitive kind of a field as it appears on the wire (JSON)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,       // String, optionally constrained by pattern / enum values
    Integer,    // i32 / i64
    Decimal,    // f64
    Boolean,    // bool
    Timestamp,  // RFC 3339 DateTime<Utc>
    List,       // Vec<T> (size chart columns, rows)
    Reference,  // Id of another record of the same or other collection
}

