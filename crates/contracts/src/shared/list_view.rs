//! List View: filter / sort / paginate over the full in-memory sequence

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use thiserror::Error;

use crate::domain::common::Record;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListViewError {
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),
}

/// Ключ сортировки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: false,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }
}

/// Параметры списка (query string на бэкенде, состояние таблицы на клиенте)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    /// Текст поиска
    pub q: String,
    pub sort_by: Option<String>,
    pub sort_desc: bool,
    /// Номер страницы (с нуля)
    pub page: usize,
    pub page_size: usize,
    /// Фильтр по статусу активности
    pub is_active: Option<bool>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            sort_by: None,
            sort_desc: false,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            is_active: None,
        }
    }
}

impl ListQuery {
    /// Новый текст поиска всегда возвращает на первую страницу
    pub fn set_filter(&mut self, q: impl Into<String>) {
        self.q = q.into();
        self.page = 0;
    }

    /// Клик по заголовку: та же колонка переключает направление
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by.as_deref() == Some(field) {
            self.sort_desc = !self.sort_desc;
        } else {
            self.sort_by = Some(field.to_string());
            self.sort_desc = false;
        }
        self.page = 0;
    }

    pub fn effective_page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

/// Одна страница списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Прогнать записи через фильтр, сортировку и пагинацию
pub fn query<T: Record>(records: Vec<T>, query: &ListQuery) -> Result<Page<T>, ListViewError> {
    let sort = resolve_sort::<T>(query)?;

    let needle = query.q.trim().to_lowercase();
    let mut rows: Vec<(T, Value)> = records
        .into_iter()
        .map(|record| {
            let value = serde_json::to_value(&record).unwrap_or(Value::Null);
            (record, value)
        })
        .filter(|(_, value)| needle.is_empty() || matches_filter::<T>(value, &needle))
        .filter(|(_, value)| match query.is_active {
            Some(wanted) => value.get("isActive").and_then(Value::as_bool) == Some(wanted),
            None => true,
        })
        .collect();

    if let Some(sort) = sort {
        // sort_by стабильна: равные ключи сохраняют порядок хранилища
        rows.sort_by(|(_, a), (_, b)| {
            compare_field(a.get(&sort.field), b.get(&sort.field), sort.descending)
        });
    }

    let page_size = query.effective_page_size();
    let total = rows.len();
    let total_pages = total.div_ceil(page_size);
    let items = rows
        .into_iter()
        .skip(query.page.saturating_mul(page_size))
        .take(page_size)
        .map(|(record, _)| record)
        .collect();

    Ok(Page {
        items,
        total,
        page: query.page,
        page_size,
        total_pages,
    })
}

fn resolve_sort<T: Record>(query: &ListQuery) -> Result<Option<SortSpec>, ListViewError> {
    match query.sort_by.as_deref().map(str::trim) {
        Some(field) if !field.is_empty() => {
            if field != "id" && T::schema().field(field).is_none() {
                return Err(ListViewError::UnknownSortField(field.to_string()));
            }
            Ok(Some(SortSpec {
                field: field.to_string(),
                descending: query.sort_desc,
            }))
        }
        _ => Ok(T::default_sort()),
    }
}

fn matches_filter<T: Record>(value: &Value, needle: &str) -> bool {
    T::search_fields().iter().any(|field| match value.get(*field) {
        Some(Value::String(s)) => s.to_lowercase().contains(needle),
        Some(Value::Number(n)) => n.to_string().contains(needle),
        _ => false,
    })
}

/// Сравнение значений поля; null всегда в конце независимо от направления
fn compare_field(a: Option<&Value>, b: Option<&Value>, descending: bool) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let cmp = compare_values(a, b);
            if descending {
                cmp.reverse()
            } else {
                cmp
            }
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
