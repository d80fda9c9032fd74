pub mod aggregate;

pub use aggregate::{Faq, FaqId, FAQ_SCHEMA};
