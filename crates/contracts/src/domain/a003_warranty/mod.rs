pub mod aggregate;

pub use aggregate::{Warranty, WarrantyId, WARRANTY_SCHEMA};
