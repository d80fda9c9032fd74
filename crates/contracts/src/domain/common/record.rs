use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use super::AggregateId;
use crate::shared::list_view::SortSpec;
use crate::shared::metadata::{push_error, EntitySchema, FieldErrorMap, ValidationResult};

/// Трейт для записи управляемой коллекции
///
/// Определяет идентичность записи, метаданные коллекции для UI и схему
/// валидации. Все CRUD-компоненты (хранилище, список, диалог) работают
/// через этот трейт.
pub trait Record:
    Clone + Default + Serialize + DeserializeOwned + std::fmt::Debug + Send + Sync + 'static
{
    /// Тип идентификатора записи
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// ID записи; `None` для ещё не сохранённой записи
    fn id(&self) -> Option<Self::Id>;

    /// Присвоить ID (вызывается хранилищем при вставке)
    fn set_id(&mut self, id: Self::Id);

    /// Проставить дату создания, если у типа она есть и ещё не заполнена
    fn stamp_created(&mut self, _at: DateTime<Utc>) {}

    /// Межполевые проверки, которые не выражаются схемой
    fn check_invariants(&self, _errors: &mut FieldErrorMap) {}

    // ============================================================================
    // Метаданные коллекции (статические данные)
    // ============================================================================

    /// Индекс коллекции в системе (например, "a003")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для API (например, "warranty")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Warranty")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Warranties")
    fn list_name() -> &'static str;

    /// Схема полей для валидации
    fn schema() -> &'static EntitySchema;

    /// Поля, по которым работает текстовый поиск в списке
    fn search_fields() -> &'static [&'static str];

    /// Сортировка списка по умолчанию
    fn default_sort() -> Option<SortSpec> {
        None
    }

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя коллекции (например, "a003_warranty")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Валидация записи: схема + межполевые проверки
    fn validate(&self) -> ValidationResult {
        let mut result = match serde_json::to_value(self) {
            Ok(value) => Self::schema().validate(&value),
            Err(e) => {
                let mut errors = FieldErrorMap::new();
                push_error(&mut errors, "_record", e.to_string());
                ValidationResult::from_errors(errors)
            }
        };

        self.check_invariants(&mut result.errors);
        result.valid = result.errors.is_empty();
        result
    }
}
