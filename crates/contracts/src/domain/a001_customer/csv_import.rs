//! Разбор CSV для массового импорта покупателей
//!
//! Формат: первая строка содержит заголовок, ячейки заголовка сравниваются после
//! trim + lowercase. Строки делятся по `,` без поддержки кавычек: `"` считается
//! обычным символом данных.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::Customer;
use crate::shared::csv_reader;

/// Колонки, которые понимает импорт
pub const CUSTOMER_CSV_FIELDS: [&str; 10] = [
    "name",
    "phone",
    "email",
    "gst type",
    "gst number",
    "street",
    "city",
    "state",
    "pincode",
    "country",
];

/// Ошибки уровня файла (импорт целиком невозможен)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvImportError {
    #[error("CSV file is empty")]
    Empty,

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Unreadable header line: {0}")]
    UnreadableHeader(String),
}

/// Отклонённая строка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// Номер строки в файле (с единицы, заголовок в строке 1)
    pub row: usize,
    pub message: String,
}

/// Принятая строка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedRow {
    pub row: usize,
    pub customer: Customer,
}

/// Результат разбора: частичный успех считается нормой
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerImportPreview {
    pub accepted: Vec<AcceptedRow>,
    pub errors: Vec<RowError>,
}

/// Итог импорта в хранилище
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerImportReport {
    pub imported: usize,
    pub errors: Vec<RowError>,
}

/// Разобрать CSV-текст в список покупателей и ошибок по строкам
pub fn parse_customer_csv(text: &str) -> Result<CustomerImportPreview, CsvImportError> {
    let mut reader = csv_reader::reader(text);

    let mut preview = CustomerImportPreview::default();
    let mut header: Option<Vec<String>> = None;

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                if header.is_none() {
                    return Err(CsvImportError::UnreadableHeader(e.to_string()));
                }
                let row = e.position().map(|p| p.line() as usize).unwrap_or(0);
                preview.errors.push(RowError {
                    row,
                    message: format!("Unreadable line: {}", e),
                });
                continue;
            }
        };

        if csv_reader::is_blank_line(&record) {
            continue;
        }

        let row = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let Some(columns) = header.as_ref() else {
            let columns: Vec<String> = record.iter().map(|c| c.trim().to_lowercase()).collect();
            for required in ["name", "phone"] {
                if !columns.iter().any(|c| c == required) {
                    return Err(CsvImportError::MissingColumn(required));
                }
            }
            header = Some(columns);
            continue;
        };

        if record.len() != columns.len() {
            preview.errors.push(RowError {
                row,
                message: format!(
                    "Expected {} columns but found {}",
                    columns.len(),
                    record.len()
                ),
            });
            continue;
        }

        let cell = |name: &str| -> String {
            columns
                .iter()
                .position(|c| c == name)
                .and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let name = cell("name");
        let phone = cell("phone");
        if name.is_empty() || phone.is_empty() {
            preview.errors.push(RowError {
                row,
                message: "Name and phone are required".into(),
            });
            continue;
        }

        let mut customer = Customer {
            name,
            phone,
            email: cell("email"),
            gst_type: cell("gst type").to_lowercase(),
            gst_number: cell("gst number").to_uppercase(),
            street: cell("street"),
            city: cell("city"),
            state: cell("state"),
            pincode: cell("pincode"),
            ..Default::default()
        };
        let country = cell("country");
        if !country.is_empty() {
            customer.country = country;
        }

        preview.accepted.push(AcceptedRow { row, customer });
    }

    if header.is_none() {
        return Err(CsvImportError::Empty);
    }

    Ok(preview)
}

/// Шаблон CSV для скачивания пользователем
pub fn customer_csv_template() -> String {
    let header = CUSTOMER_CSV_FIELDS
        .iter()
        .map(|f| {
            let mut chars = f.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{}\nAsha Traders,9812345678,asha@example.com,regular,27AAPFU0939F1ZV,12 MG Road,Pune,Maharashtra,411001,India",
        header
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Record;

    const HEADER: &str = "Name, Phone ,Email,GST Type,GST Number,Street,City,State,Pincode,Country";

    #[test]
    fn test_accepts_valid_rows() {
        let text = format!(
            "{HEADER}\nAsha,9812345678,a@x.in,Regular,27aapfu0939f1zv,MG Road,Pune,MH,411001,\nRavi,9123456780,,,,,,,,"
        );
        let preview = parse_customer_csv(&text).unwrap();

        assert!(preview.errors.is_empty());
        assert_eq!(preview.accepted.len(), 2);
        let first = &preview.accepted[0];
        assert_eq!(first.row, 2);
        assert_eq!(first.customer.name, "Asha");
        assert_eq!(first.customer.gst_type, "regular");
        assert_eq!(first.customer.gst_number, "27AAPFU0939F1ZV");
        assert_eq!(first.customer.country, "India");
        assert!(first.customer.id.is_none());
        assert_eq!(preview.accepted[1].row, 3);
    }

    #[test]
    fn test_cell_count_mismatch_rejects_row() {
        let text = format!("{HEADER}\n\"Doe, John\",9812345678,,,,,,,,\nRavi,9123456780,,,,,,,,");
        let preview = parse_customer_csv(&text).unwrap();

        assert_eq!(preview.errors.len(), 1);
        assert_eq!(preview.errors[0].row, 2);
        assert_eq!(preview.errors[0].message, "Expected 10 columns but found 11");
        assert_eq!(preview.accepted.len(), 1);
        assert_eq!(preview.accepted[0].customer.name, "Ravi");
    }

    #[test]
    fn test_blank_name_or_phone_rejects_row() {
        let text = format!("{HEADER}\n  ,9812345678,,,,,,,,\nAsha,   ,,,,,,,,\n   ,  ,,,,,,,,x");
        let preview = parse_customer_csv(&text).unwrap();

        assert!(preview.accepted.is_empty());
        let rows: Vec<_> = preview.errors.iter().map(|e| e.row).collect();
        assert_eq!(rows, vec![2, 3, 4]);
        assert!(preview
            .errors
            .iter()
            .all(|e| e.message == "Name and phone are required"));
    }

    #[test]
    fn test_header_matching_and_file_errors() {
        assert_eq!(parse_customer_csv("").unwrap_err(), CsvImportError::Empty);
        assert_eq!(
            parse_customer_csv("\u{FEFF}name,email\nAsha,a@x.in").unwrap_err(),
            CsvImportError::MissingColumn("phone")
        );

        // колонки в другом порядке и неизвестные колонки
        let preview = parse_customer_csv("PHONE,notes,NAME\r\n9812345678,vip,Asha\r\n").unwrap();
        assert_eq!(preview.accepted.len(), 1);
        assert_eq!(preview.accepted[0].customer.name, "Asha");
        assert_eq!(preview.accepted[0].customer.phone, "9812345678");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = format!("{HEADER}\n\n   \nAsha,9812345678,,,,,,,,\n");
        let preview = parse_customer_csv(&text).unwrap();
        assert!(preview.errors.is_empty());
        assert_eq!(preview.accepted.len(), 1);
        assert_eq!(preview.accepted[0].customer.name, "Asha");
    }

    #[test]
    fn test_rows_of_blank_cells_are_reported() {
        let preview =
            parse_customer_csv("name,phone,email\nAsha,9812345678,\n,,\n  ,\nRavi,9123456780,").unwrap();

        assert_eq!(preview.accepted.len(), 2);
        assert_eq!(preview.errors.len(), 2);
        assert_eq!(preview.errors[0].message, "Name and phone are required");
        assert_eq!(preview.errors[1].message, "Expected 3 columns but found 2");
    }

    #[test]
    fn test_template_parses() {
        let preview = parse_customer_csv(&customer_csv_template()).unwrap();
        assert_eq!(preview.accepted.len(), 1);
        assert!(preview.accepted[0].customer.validate().valid);
    }
}
