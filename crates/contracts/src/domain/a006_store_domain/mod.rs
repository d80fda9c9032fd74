pub mod aggregate;

pub use aggregate::{StoreDomain, StoreDomainId, SSL_STATUSES, STORE_DOMAIN_SCHEMA};
