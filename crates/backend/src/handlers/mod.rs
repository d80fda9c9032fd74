pub mod a001_customer;
pub mod a002_size_chart;
pub mod crud;
