pub mod aggregate;

pub use aggregate::{TaxCategory, TaxCategoryId, TAX_CATEGORY_SCHEMA};
