pub mod aggregate;

pub use aggregate::{CommissionRule, CommissionRuleId, COMMISSION_RULE_SCHEMA, RULE_TYPES};
