//! Edit Dialog: stages edits to one record before committing to the store
//!
//! `Closed -> Open(Create | Edit(id))`; every change re-runs the validator;
//! a submit with zero errors upserts, closes and notifies; a submit with
//! errors stays open; cancel discards the draft without touching the store.

use serde_json::Value;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::domain::common::Record;
use crate::shared::metadata::FieldErrorMap;
use crate::shared::notification::NotificationChannel;
use crate::shared::record_store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode<Id> {
    Create,
    Edit(Id),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("Dialog is not open")]
    NotOpen,

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Результат попытки сохранения
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Запись сохранена, диалог закрыт
    Saved(T),
    /// Есть ошибки валидации, диалог остаётся открытым
    Invalid(FieldErrorMap),
    /// Хранилище отказало, диалог остаётся открытым, данные не изменены
    Failed(String),
    NotOpen,
}

#[derive(Debug, Clone)]
struct OpenState<T: Record> {
    mode: DialogMode<T::Id>,
    draft: T,
    errors: FieldErrorMap,
    touched: BTreeSet<String>,
    submit_attempted: bool,
}

impl<T: Record> OpenState<T> {
    fn new(mode: DialogMode<T::Id>, draft: T) -> Self {
        let errors = draft.validate().errors;
        Self {
            mode,
            draft,
            errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
        }
    }

    fn revalidate(&mut self) {
        self.errors = self.draft.validate().errors;
    }
}

/// Модальная форма создания / редактирования записи
#[derive(Debug, Clone)]
pub struct EditDialog<T: Record> {
    state: Option<OpenState<T>>,
}

impl<T: Record> Default for EditDialog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EditDialog<T> {
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Открыть пустую форму (значения по умолчанию)
    pub fn open_new(&mut self) {
        self.open_with_draft(T::default());
    }

    /// Открыть форму создания с заполненным черновиком (например, после импорта)
    pub fn open_with_draft(&mut self, draft: T) {
        self.state = Some(OpenState::new(DialogMode::Create, draft));
    }

    /// Открыть существующую запись; запись без ID открывается как новая
    pub fn open_edit(&mut self, record: T) {
        let mode = match record.id() {
            Some(id) => DialogMode::Edit(id),
            None => DialogMode::Create,
        };
        self.state = Some(OpenState::new(mode, record));
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn mode(&self) -> Option<DialogMode<T::Id>> {
        self.state.as_ref().map(|s| s.mode)
    }

    pub fn draft(&self) -> Option<&T> {
        self.state.as_ref().map(|s| &s.draft)
    }

    /// Все текущие ошибки черновика
    pub fn errors(&self) -> Option<&FieldErrorMap> {
        self.state.as_ref().map(|s| &s.errors)
    }

    /// Ошибки для показа у полей: до первой попытки сохранения только по
    /// затронутым полям, после неё все
    pub fn visible_errors(&self) -> FieldErrorMap {
        let Some(state) = &self.state else {
            return FieldErrorMap::new();
        };

        if state.submit_attempted {
            return state.errors.clone();
        }

        state
            .errors
            .iter()
            .filter(|(field, _)| state.touched.contains(*field))
            .map(|(field, message)| (field.clone(), message.clone()))
            .collect()
    }

    /// Изменить одно поле по имени (привязка к полю формы)
    pub fn set_field(&mut self, field: &str, value: Value) -> Result<(), DialogError> {
        let state = self.state.as_mut().ok_or(DialogError::NotOpen)?;

        if T::schema().field(field).is_none() {
            return Err(DialogError::UnknownField(field.to_string()));
        }

        let invalid = |message: String| DialogError::InvalidValue {
            field: field.to_string(),
            message,
        };

        let mut candidate = serde_json::to_value(&state.draft).map_err(|e| invalid(e.to_string()))?;
        let object = candidate
            .as_object_mut()
            .ok_or_else(|| invalid("record is not an object".into()))?;
        object.insert(field.to_string(), value);

        state.draft = serde_json::from_value(candidate).map_err(|e| invalid(e.to_string()))?;
        state.touched.insert(field.to_string());
        state.revalidate();
        Ok(())
    }

    /// Типизированное изменение черновика
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> Result<(), DialogError> {
        let state = self.state.as_mut().ok_or(DialogError::NotOpen)?;
        f(&mut state.draft);
        state.revalidate();
        Ok(())
    }

    /// Сохранить черновик
    pub fn submit<S>(&mut self, store: &S, notifications: &mut NotificationChannel) -> SubmitOutcome<T>
    where
        S: RecordStore<T> + ?Sized,
    {
        let Some(state) = self.state.as_mut() else {
            return SubmitOutcome::NotOpen;
        };

        state.submit_attempted = true;
        state.revalidate();
        if !state.errors.is_empty() {
            return SubmitOutcome::Invalid(state.errors.clone());
        }

        let verb = match state.mode {
            DialogMode::Create => "created",
            DialogMode::Edit(_) => "updated",
        };

        match store.upsert(state.draft.clone()) {
            Ok(saved) => {
                notifications.success(format!("{} {} successfully", T::element_name(), verb));
                self.state = None;
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                notifications.error(format!(
                    "Failed to save {}. Please try again.",
                    T::element_name().to_lowercase()
                ));
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Закрыть без сохранения
    pub fn cancel(&mut self) {
        self.state = None;
    }
}

/// Результат подтверждения удаления
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(String),
    NotOpen,
}

/// Диалог подтверждения удаления
#[derive(Debug, Clone)]
pub struct DeleteConfirmation<T: Record> {
    pending: Option<T::Id>,
}

impl<T: Record> Default for DeleteConfirmation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> DeleteConfirmation<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn request(&mut self, id: T::Id) {
        self.pending = Some(id);
    }

    pub fn pending(&self) -> Option<T::Id> {
        self.pending
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Удалить запись; отсутствующий ID не считается ошибкой
    pub fn confirm<S>(&mut self, store: &S, notifications: &mut NotificationChannel) -> DeleteOutcome
    where
        S: RecordStore<T> + ?Sized,
    {
        let Some(id) = self.pending else {
            return DeleteOutcome::NotOpen;
        };

        match store.remove(id) {
            Ok(_) => {
                notifications.success(format!("{} deleted successfully", T::element_name()));
                self.pending = None;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                notifications.error(format!(
                    "Failed to delete {}. Please try again.",
                    T::element_name().to_lowercase()
                ));
                DeleteOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_warranty::{Warranty, WarrantyId};
    use crate::shared::notification::Severity;
    use crate::shared::record_store::{InMemoryStore, StoreError};
    use serde_json::json;

    struct FailingStore;

    impl RecordStore<Warranty> for FailingStore {
        fn list(&self) -> Vec<Warranty> {
            Vec::new()
        }

        fn get(&self, _id: WarrantyId) -> Option<Warranty> {
            None
        }

        fn upsert(&self, _record: Warranty) -> Result<Warranty, StoreError> {
            Err(StoreError::Unavailable("timeout".into()))
        }

        fn remove(&self, _id: WarrantyId) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("timeout".into()))
        }
    }

    fn fill_valid(dialog: &mut EditDialog<Warranty>) {
        dialog.set_field("name", json!("Extended")).unwrap();
        dialog.set_field("durationMonths", json!(24)).unwrap();
    }

    #[test]
    fn test_create_flow_commits_and_closes() {
        let store = InMemoryStore::<Warranty>::new();
        let mut notifications = NotificationChannel::new();
        let mut dialog = EditDialog::<Warranty>::new();

        dialog.open_new();
        assert_eq!(dialog.mode(), Some(DialogMode::Create));
        fill_valid(&mut dialog);

        let outcome = dialog.submit(&store, &mut notifications);

        let SubmitOutcome::Saved(saved) = outcome else {
            panic!("expected Saved");
        };
        assert!(saved.id.is_some());
        assert!(!dialog.is_open());
        assert_eq!(store.len(), 1);
        let shown = notifications.visible().unwrap();
        assert_eq!(shown.severity, Severity::Success);
        assert_eq!(shown.message, "Warranty created successfully");
    }

    #[test]
    fn test_invalid_submit_stays_open_without_store_call() {
        let store = InMemoryStore::<Warranty>::new();
        let mut notifications = NotificationChannel::new();
        let mut dialog = EditDialog::<Warranty>::new();
        dialog.open_new();

        let outcome = dialog.submit(&store, &mut notifications);

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid");
        };
        assert!(errors.contains_key("name"));
        assert!(dialog.is_open());
        assert!(store.is_empty());
        assert!(notifications.visible().is_none());
        // after a submit attempt every error is visible
        assert_eq!(dialog.visible_errors(), errors);
    }

    #[test]
    fn test_errors_follow_field_changes() {
        let mut dialog = EditDialog::<Warranty>::new();
        dialog.open_new();
        assert!(dialog.errors().unwrap().contains_key("name"));
        assert!(dialog.visible_errors().is_empty());

        dialog.set_field("name", json!("  ")).unwrap();
        assert_eq!(dialog.visible_errors().get("name").unwrap(), "Name is required");

        dialog.set_field("name", json!("Basic")).unwrap();
        assert!(!dialog.errors().unwrap().contains_key("name"));
    }

    #[test]
    fn test_set_field_rejects_unknown_and_mistyped() {
        let mut dialog = EditDialog::<Warranty>::new();
        assert_eq!(
            dialog.set_field("name", json!("x")).unwrap_err(),
            DialogError::NotOpen
        );

        dialog.open_new();
        assert!(matches!(
            dialog.set_field("colour", json!("red")),
            Err(DialogError::UnknownField(_))
        ));
        assert!(matches!(
            dialog.set_field("durationMonths", json!("twelve")),
            Err(DialogError::InvalidValue { .. })
        ));
        assert_eq!(dialog.draft().unwrap().duration_months, 0);
    }

    #[test]
    fn test_edit_flow_replaces_record() {
        let store = InMemoryStore::<Warranty>::new();
        let mut notifications = NotificationChannel::new();
        let mut dialog = EditDialog::<Warranty>::new();
        dialog.open_new();
        fill_valid(&mut dialog);
        let SubmitOutcome::Saved(saved) = dialog.submit(&store, &mut notifications) else {
            panic!("expected Saved");
        };

        dialog.open_edit(saved.clone());
        assert_eq!(dialog.mode(), Some(DialogMode::Edit(saved.id.unwrap())));
        dialog.update(|w| w.duration_months = 36).unwrap();
        assert!(matches!(dialog.submit(&store, &mut notifications), SubmitOutcome::Saved(_)));

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].duration_months, 36);
        assert_eq!(
            notifications.visible().unwrap().message,
            "Warranty updated successfully"
        );
    }

    #[test]
    fn test_cancel_discards_draft() {
        let store = InMemoryStore::<Warranty>::new();
        let mut dialog = EditDialog::<Warranty>::new();
        dialog.open_new();
        fill_valid(&mut dialog);

        dialog.cancel();

        assert!(!dialog.is_open());
        assert!(store.is_empty());
        assert_eq!(
            dialog.submit(&store, &mut NotificationChannel::new()),
            SubmitOutcome::NotOpen
        );
    }

    #[test]
    fn test_store_failure_keeps_dialog_open() {
        let mut notifications = NotificationChannel::new();
        let mut dialog = EditDialog::<Warranty>::new();
        dialog.open_new();
        fill_valid(&mut dialog);

        let outcome = dialog.submit(&FailingStore, &mut notifications);

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(dialog.is_open());
        assert_eq!(dialog.draft().unwrap().name, "Extended");
        assert_eq!(notifications.visible().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_delete_confirmation() {
        let store = InMemoryStore::with_fixtures(vec![Warranty {
            name: "Basic".into(),
            duration_months: 6,
            ..Default::default()
        }])
        .unwrap();
        let id = store.list()[0].id.unwrap();
        let mut notifications = NotificationChannel::new();
        let mut confirm = DeleteConfirmation::<Warranty>::new();

        assert_eq!(confirm.confirm(&store, &mut notifications), DeleteOutcome::NotOpen);

        confirm.request(id);
        confirm.cancel();
        assert_eq!(store.len(), 1);

        confirm.request(id);
        assert_eq!(confirm.confirm(&store, &mut notifications), DeleteOutcome::Deleted);
        assert!(store.is_empty());
        assert!(confirm.pending().is_none());

        confirm.request(id);
        assert!(matches!(
            confirm.confirm(&FailingStore, &mut notifications),
            DeleteOutcome::Failed(_)
        ));
        assert_eq!(confirm.pending(), Some(id));
    }
}
