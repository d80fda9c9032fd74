//! Common types and traits for all managed collections

pub mod aggregate_id;
pub mod record;

// Re-exports
pub use aggregate_id::AggregateId;
pub use record::Record;
