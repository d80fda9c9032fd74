pub mod aggregate;

pub use aggregate::{Language, LanguageId, LANGUAGE_SCHEMA};
