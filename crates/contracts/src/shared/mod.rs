pub mod csv_reader;
pub mod edit_dialog;
pub mod list_view;
pub mod metadata;
pub mod notification;
pub mod record_store;
