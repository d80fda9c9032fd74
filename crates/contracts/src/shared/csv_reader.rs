//! Общая настройка чтения CSV для импорта
//!
//! Кавычки не поддерживаются: `"` считается обычным символом, а `,`
//! всегда разделяет ячейки. Строки разной длины допустимы, длину
//! проверяет вызывающий код.

/// Читатель CSV без заголовка и без кавычек; UTF-8 BOM отбрасывается
pub fn reader(text: &str) -> csv::Reader<&[u8]> {
    let text = text.trim_start_matches('\u{FEFF}');

    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes())
}

/// Пустая строка или строка из одних пробелов
///
/// Такая строка читается как одна пустая ячейка. Строка с разделителями
/// (`,,`) пустой не считается, даже если все ячейки пусты.
pub fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.len() <= 1 && record.get(0).map_or(true, |cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(text: &str) -> Vec<csv::StringRecord> {
        reader(text).records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_blank_line_detection() {
        let rows = records("a,b\n   \n,,\n  ,\n");
        let blank: Vec<bool> = rows.iter().map(is_blank_line).collect();
        assert_eq!(blank, vec![false, true, false, false]);
    }

    #[test]
    fn test_quotes_are_data() {
        let rows = records("\u{FEFF}\"Doe, John\",1\n");
        assert_eq!(rows[0].len(), 3);
        assert_eq!(&rows[0][0], "\"Doe");
    }
}
