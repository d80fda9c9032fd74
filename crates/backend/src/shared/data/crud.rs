//! Общий CRUD-сервис для всех коллекций

use contracts::domain::common::{AggregateId, Record};
use contracts::shared::list_view::{self, ListQuery, Page};
use contracts::shared::metadata::{push_error, FieldErrorMap, ValidationResult};
use contracts::shared::record_store::{InMemoryStore, RecordStore};
use serde_json::Value;

use super::app_state::CommitDelay;
use crate::shared::error::ApiError;

/// Страница списка по параметрам запроса
pub fn list<T: Record>(store: &InMemoryStore<T>, query: &ListQuery) -> Result<Page<T>, ApiError> {
    Ok(list_view::query(store.list(), query)?)
}

/// Разобрать строковый id коллекции
pub fn parse_id<T: Record>(raw: &str) -> Result<T::Id, ApiError> {
    T::Id::from_string(raw).map_err(ApiError::BadRequest)
}

pub fn get_by_id<T: Record>(store: &InMemoryStore<T>, id: T::Id) -> Result<T, ApiError> {
    store.get(id).ok_or_else(|| {
        ApiError::NotFound(format!("{} not found: {}", T::element_name(), id.as_string()))
    })
}

/// Создание или обновление записи
///
/// Невалидная запись не доходит до хранилища. Перед фиксацией
/// выдерживается настроенная задержка.
pub async fn save<T: Record>(
    store: &InMemoryStore<T>,
    delay: CommitDelay,
    record: T,
) -> Result<T, ApiError> {
    let validation = record.validate();
    if !validation.valid {
        tracing::debug!(
            "{}: validation failed: {:?}",
            T::full_name(),
            validation.errors
        );
        return Err(ApiError::Validation(validation.errors));
    }

    delay.wait().await;

    let is_new = record.id().is_none();
    let saved = store.upsert(record).map_err(|e| {
        tracing::warn!("{}: save failed: {}", T::full_name(), e);
        ApiError::from(e)
    })?;

    if let Some(id) = saved.id() {
        tracing::info!(
            "{}: {} {}",
            T::full_name(),
            if is_new { "created" } else { "updated" },
            id.as_string()
        );
    }
    Ok(saved)
}

/// Удаление; `false`, если записи не было
pub async fn delete<T: Record>(
    store: &InMemoryStore<T>,
    delay: CommitDelay,
    id: T::Id,
) -> Result<bool, ApiError> {
    delay.wait().await;
    let removed = store.remove(id)?;
    if removed {
        tracing::info!("{}: deleted {}", T::full_name(), id.as_string());
    }
    Ok(removed)
}

/// Проверка кандидата из формы без сохранения
///
/// Схема проверяется по сырому JSON, поэтому ошибки типа поля видны
/// даже если кандидат не разбирается в `T`.
pub fn validate_candidate<T: Record>(candidate: &Value) -> ValidationResult {
    let mut result = T::schema().validate(candidate);
    if let Ok(record) = serde_json::from_value::<T>(candidate.clone()) {
        record.check_invariants(&mut result.errors);
        result.valid = result.errors.is_empty();
    }
    result
}

/// Разобрать кандидата из тела запроса в запись
///
/// Поле неверного типа даёт ошибку валидации по этому полю, а не ошибку
/// разбора тела. Ошибки вне схемы (например, неверный `id`) попадают в
/// `_record`.
pub fn parse_candidate<T: Record>(candidate: Value) -> Result<T, ApiError> {
    let validation = validate_candidate::<T>(&candidate);
    if !validation.valid {
        return Err(ApiError::Validation(validation.errors));
    }

    serde_json::from_value(candidate).map_err(|e| {
        let mut errors = FieldErrorMap::new();
        push_error(&mut errors, "_record", e.to_string());
        ApiError::Validation(errors)
    })
}
