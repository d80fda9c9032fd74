use axum::extract::State;
use axum::Json;
use contracts::domain::a001_customer::{
    customer_csv_template, parse_customer_csv, Customer, CustomerImportPreview,
    CustomerImportReport,
};
use contracts::shared::record_store::InMemoryStore;
use std::sync::Arc;

use crate::domain::a001_customer;
use crate::shared::data::CommitDelay;
use crate::shared::error::ApiError;

/// POST /api/customer/import/preview
///
/// Тело запроса: CSV-текст. Ничего не сохраняет.
pub async fn import_preview(body: String) -> Result<Json<CustomerImportPreview>, ApiError> {
    Ok(Json(parse_customer_csv(&body)?))
}

/// POST /api/customer/import
pub async fn import(
    State(store): State<Arc<InMemoryStore<Customer>>>,
    State(delay): State<CommitDelay>,
    body: String,
) -> Result<Json<CustomerImportReport>, ApiError> {
    let report = a001_customer::service::import_customers(&store, delay, &body).await?;
    Ok(Json(report))
}

/// GET /api/customer/import/template
pub async fn import_template() -> ([(axum::http::HeaderName, &'static str); 2], String) {
    (
        [
            (axum::http::header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                axum::http::header::CONTENT_DISPOSITION,
                "attachment; filename=\"customers.csv\"",
            ),
        ],
        customer_csv_template(),
    )
}
