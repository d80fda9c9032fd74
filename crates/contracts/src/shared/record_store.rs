//! Record Store: the system of record for one collection
//!
//! Mutation happens only through whole-record `upsert` and `remove`.

use chrono::Utc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::domain::common::{AggregateId, Record};

/// Ошибки хранилища
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Upsert с ID, которого нет в хранилище
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Хранилище недоступно (удалённая реализация)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Контракт хранилища записей одной коллекции
pub trait RecordStore<T: Record> {
    /// Все записи в порядке хранения
    fn list(&self) -> Vec<T>;

    /// Запись по ID
    fn get(&self, id: T::Id) -> Option<T>;

    /// Вставка новой (без ID) или замена существующей записи целиком
    fn upsert(&self, record: T) -> Result<T, StoreError>;

    /// Удаление; возвращает `false`, если записи не было
    fn remove(&self, id: T::Id) -> Result<bool, StoreError>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory хранилище: упорядоченный Vec под RwLock
#[derive(Debug)]
pub struct InMemoryStore<T: Record> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Хранилище, заполненное фикстурами (через обычный upsert)
    pub fn with_fixtures(fixtures: impl IntoIterator<Item = T>) -> Result<Self, StoreError> {
        let store = Self::new();
        for record in fixtures {
            store.upsert(record)?;
        }
        Ok(store)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    fn get(&self, id: T::Id) -> Option<T> {
        self.read().iter().find(|r| r.id() == Some(id)).cloned()
    }

    fn upsert(&self, mut record: T) -> Result<T, StoreError> {
        let mut records = self.write();

        match record.id() {
            None => {
                record.set_id(T::Id::generate());
                record.stamp_created(Utc::now());
                records.push(record.clone());
                Ok(record)
            }
            Some(id) => {
                let slot = records
                    .iter_mut()
                    .find(|r| r.id() == Some(id))
                    .ok_or_else(|| StoreError::NotFound(id.as_string()))?;
                *slot = record.clone();
                Ok(record)
            }
        }
    }

    fn remove(&self, id: T::Id) -> Result<bool, StoreError> {
        let mut records = self.write();
        let before = records.len();
        records.retain(|r| r.id() != Some(id));
        Ok(records.len() != before)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
