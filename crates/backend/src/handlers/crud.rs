//! Обобщённые обработчики CRUD: одна реализация для всех коллекций
//!
//! Каждый обработчик параметризован типом записи и извлекает из
//! состояния только своё хранилище.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::{AggregateId, Record};
use contracts::shared::list_view::{ListQuery, Page};
use contracts::shared::metadata::{EntitySchema, ValidationResult};
use contracts::shared::record_store::InMemoryStore;
use serde_json::Value;
use std::sync::Arc;

use crate::shared::data::{crud, CommitDelay};
use crate::shared::error::ApiError;

/// GET /api/{collection}
pub async fn list<T: Record>(
    State(store): State<Arc<InMemoryStore<T>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<T>>, ApiError> {
    Ok(Json(crud::list(&store, &query)?))
}

/// GET /api/{collection}/:id
pub async fn get_by_id<T: Record>(
    State(store): State<Arc<InMemoryStore<T>>>,
    Path(id): Path<String>,
) -> Result<Json<T>, ApiError> {
    let id = crud::parse_id::<T>(&id)?;
    Ok(Json(crud::get_by_id(&store, id)?))
}

/// POST /api/{collection}
pub async fn upsert<T: Record>(
    State(store): State<Arc<InMemoryStore<T>>>,
    State(delay): State<CommitDelay>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    let Json(candidate) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let record = crud::parse_candidate::<T>(candidate)?;
    Ok(Json(crud::save(&store, delay, record).await?))
}

/// DELETE /api/{collection}/:id
pub async fn delete<T: Record>(
    State(store): State<Arc<InMemoryStore<T>>>,
    State(delay): State<CommitDelay>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = crud::parse_id::<T>(&id)?;
    if crud::delete(&store, delay, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "{} not found: {}",
            T::element_name(),
            id.as_string()
        )))
    }
}

/// POST /api/{collection}/validate
pub async fn validate<T: Record>(Json(candidate): Json<Value>) -> Json<ValidationResult> {
    Json(crud::validate_candidate::<T>(&candidate))
}

/// GET /api/{collection}/schema
pub async fn schema<T: Record>() -> Json<&'static EntitySchema> {
    Json(T::schema())
}
