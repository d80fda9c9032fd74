pub mod a001_customer;
pub mod a002_size_chart;
pub mod a003_warranty;
pub mod a004_tax_category;
pub mod a005_language;
pub mod a006_store_domain;
pub mod a007_faq;
pub mod a008_commission_rule;
pub mod a009_brand;
pub mod a010_category;
