pub mod aggregate;
pub mod csv_import;

pub use aggregate::{Customer, CustomerId, CUSTOMER_SCHEMA, GST_TYPES};
pub use csv_import::{
    customer_csv_template, parse_customer_csv, AcceptedRow, CsvImportError, CustomerImportPreview,
    CustomerImportReport, RowError, CUSTOMER_CSV_FIELDS,
};
