//! Schema types for describing records and validating candidates
//!
//! Every record type declares a static [`EntitySchema`]; the validator walks
//! the schema over the record's JSON form and produces a [`FieldErrorMap`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a003_warranty::Warranty;
//! use contracts::domain::common::Record;
//!
//! let result = Warranty::default().validate();
//! for (field, message) in &result.errors {
//!     println!("{field}: {message}");
//! }
//! ```

mod field_type;
mod schema;
mod types;
mod validation;

pub use field_type::FieldType;
pub use schema::{push_error, EntitySchema, FieldErrorMap, ValidationResult};
pub use types::{FieldMetadata, EMAIL_PATTERN, SLUG_PATTERN, URL_PATTERN};
pub use validation::ValidationRules;
