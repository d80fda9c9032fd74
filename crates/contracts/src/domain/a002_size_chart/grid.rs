//! Редактирование таблицы размеров и обмен через CSV
//!
//! Экспорт повторяет исходный формат байт в байт: значения соединяются
//! через `,` без экранирования, строки через `\n`, без завершающего
//! перевода строки. Значение с запятой или кавычкой ломает формат.

use thiserror::Error;

use super::aggregate::{SizeChart, SizeChartCell, SizeChartRow};
use crate::shared::csv_reader;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Column index {0} is out of range")]
    ColumnOutOfRange(usize),

    #[error("Row index {0} is out of range")]
    RowOutOfRange(usize),

    #[error("A size chart needs at least one column")]
    LastColumn,

    #[error("CSV has no header line")]
    EmptyCsv,

    #[error("Unreadable CSV: {0}")]
    Unreadable(String),
}

impl SizeChart {
    /// Добавить колонку справа; в каждую строку добавляется пустая ячейка
    pub fn add_column(&mut self, name: impl Into<String>) {
        self.columns.push(name.into());
        for row in &mut self.rows {
            row.cells.push(SizeChartCell::default());
        }
    }

    pub fn rename_column(&mut self, index: usize, name: impl Into<String>) -> Result<(), GridError> {
        let column = self
            .columns
            .get_mut(index)
            .ok_or(GridError::ColumnOutOfRange(index))?;
        *column = name.into();
        Ok(())
    }

    /// Удалить колонку вместе с её ячейками; последнюю колонку удалить нельзя
    pub fn remove_column(&mut self, index: usize) -> Result<(), GridError> {
        if index >= self.columns.len() {
            return Err(GridError::ColumnOutOfRange(index));
        }
        if self.columns.len() == 1 {
            return Err(GridError::LastColumn);
        }

        self.columns.remove(index);
        for row in &mut self.rows {
            if index < row.cells.len() {
                row.cells.remove(index);
            }
        }
        Ok(())
    }

    /// Добавить пустую строку
    pub fn add_row(&mut self) {
        self.rows.push(SizeChartRow::empty(self.columns.len()));
    }

    pub fn remove_row(&mut self, index: usize) -> Result<(), GridError> {
        if index >= self.rows.len() {
            return Err(GridError::RowOutOfRange(index));
        }
        self.rows.remove(index);
        Ok(())
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<(), GridError> {
        let cells = &mut self
            .rows
            .get_mut(row)
            .ok_or(GridError::RowOutOfRange(row))?
            .cells;
        let cell = cells
            .get_mut(column)
            .ok_or(GridError::ColumnOutOfRange(column))?;
        cell.value = value.into();
        Ok(())
    }

    /// Экспорт в CSV (без экранирования, см. описание модуля)
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.columns.join(","));
        for row in &self.rows {
            let values: Vec<&str> = row.cells.iter().map(|c| c.value.as_str()).collect();
            lines.push(values.join(","));
        }
        lines.join("\n")
    }

    /// Заменить колонки и строки содержимым CSV
    ///
    /// Первая непустая строка содержит заголовки колонок, каждая следующая
    /// непустая строка становится строкой таблицы (в том числе `,,`).
    /// Короткие строки дополняются пустыми ячейками, лишние отбрасываются.
    pub fn replace_grid_from_csv(&mut self, text: &str) -> Result<(), GridError> {
        let mut reader = csv_reader::reader(text);

        let mut columns: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|e| GridError::Unreadable(e.to_string()))?;
            if csv_reader::is_blank_line(&record) {
                continue;
            }

            match &columns {
                // имена колонок без пробелов по краям, значения ячеек как есть
                None => columns = Some(record.iter().map(|c| c.trim().to_string()).collect()),
                Some(header) => {
                    let mut row = SizeChartRow::from_values(record.iter());
                    row.cells.resize(header.len(), SizeChartCell::default());
                    rows.push(row);
                }
            }
        }

        self.columns = columns.ok_or(GridError::EmptyCsv)?;
        self.rows = rows;
        Ok(())
    }

    /// Новая (несохранённая) сетка из CSV
    pub fn from_csv(name: impl Into<String>, text: &str) -> Result<Self, GridError> {
        let mut chart = SizeChart {
            name: name.into(),
            ..Default::default()
        };
        chart.replace_grid_from_csv(text)?;
        Ok(chart)
    }
}
