pub mod aggregate;

pub use aggregate::{slugify, Brand, BrandId, BRAND_SCHEMA};
