use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_customer::CsvImportError;
use contracts::domain::a002_size_chart::GridError;
use contracts::shared::list_view::ListViewError;
use contracts::shared::metadata::FieldErrorMap;
use contracts::shared::record_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Ошибка HTTP-слоя: статус + JSON-тело `{ error, status, errors? }`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(FieldErrorMap),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(_) => ApiError::NotFound(value.to_string()),
            StoreError::Unavailable(_) => ApiError::Unavailable(value.to_string()),
        }
    }
}

impl From<ListViewError> for ApiError {
    fn from(value: ListViewError) -> Self {
        ApiError::BadRequest(value.to_string())
    }
}

impl From<CsvImportError> for ApiError {
    fn from(value: CsvImportError) -> Self {
        ApiError::BadRequest(value.to_string())
    }
}

impl From<GridError> for ApiError {
    fn from(value: GridError) -> Self {
        ApiError::BadRequest(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(errors) => json!({
                "error": self.to_string(),
                "status": status.as_u16(),
                "errors": errors,
            }),
            _ => json!({
                "error": self.to_string(),
                "status": status.as_u16(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
