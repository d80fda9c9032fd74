use contracts::domain::a002_size_chart::{SizeChart, SizeChartId, SizeChartRow};
use contracts::domain::common::Record;
use contracts::shared::record_store::{InMemoryStore, RecordStore};

use crate::shared::error::ApiError;

/// Демонстрационные таблицы размеров
pub fn fixtures() -> Vec<SizeChart> {
    vec![
        SizeChart {
            name: "Men's T-shirts".into(),
            category: "Apparel".into(),
            unit: "inch".into(),
            columns: vec!["Size".into(), "Chest".into(), "Length".into()],
            rows: vec![
                SizeChartRow::from_values(["S", "38", "27"]),
                SizeChartRow::from_values(["M", "40", "28"]),
                SizeChartRow::from_values(["L", "42", "29"]),
            ],
            ..Default::default()
        },
        SizeChart {
            name: "Women's Kurtas".into(),
            category: "Ethnic wear".into(),
            unit: "cm".into(),
            columns: vec!["Size".into(), "Bust".into(), "Waist".into()],
            rows: vec![
                SizeChartRow::from_values(["XS", "81", "66"]),
                SizeChartRow::from_values(["S", "86", "71"]),
            ],
            ..Default::default()
        },
    ]
}

/// CSV-выгрузка: (имя файла, содержимое)
pub fn export_csv(
    store: &InMemoryStore<SizeChart>,
    id: SizeChartId,
) -> Result<(String, String), ApiError> {
    let chart = store
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("{} not found: {}", SizeChart::element_name(), id)))?;

    Ok((export_file_name(&chart), chart.to_csv()))
}

/// Черновик таблицы из CSV (в хранилище не сохраняется)
pub fn draft_from_csv(name: &str, unit: Option<&str>, text: &str) -> Result<SizeChart, ApiError> {
    let mut chart = SizeChart::from_csv(name.trim(), text)?;
    if let Some(unit) = unit.map(str::trim).filter(|u| !u.is_empty()) {
        chart.unit = unit.to_lowercase();
    }
    Ok(chart)
}

fn export_file_name(chart: &SizeChart) -> String {
    let stem = chart
        .name
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if stem.is_empty() {
        "size-chart.csv".to_string()
    } else {
        format!("{stem}.csv")
    }
}
