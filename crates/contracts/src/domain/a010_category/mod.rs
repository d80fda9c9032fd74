pub mod aggregate;

pub use aggregate::{Category, CategoryId, CATEGORY_SCHEMA};
