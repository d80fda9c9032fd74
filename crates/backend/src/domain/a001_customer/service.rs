use contracts::domain::a001_customer::{
    parse_customer_csv, Customer, CustomerImportReport, RowError,
};
use contracts::domain::common::Record;
use contracts::shared::record_store::{InMemoryStore, RecordStore};

use crate::shared::data::app_state::CommitDelay;
use crate::shared::error::ApiError;

/// Демонстрационные покупатели
pub fn fixtures() -> Vec<Customer> {
    vec![
        Customer {
            name: "Aarav Sharma".into(),
            phone: "9876543210".into(),
            email: "aarav@example.com".into(),
            gst_type: "consumer".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            pincode: "400001".into(),
            ..Default::default()
        },
        Customer {
            name: "Kaveri Textiles".into(),
            phone: "+919845012345".into(),
            email: "accounts@kaveri.example.com".into(),
            gst_type: "regular".into(),
            gst_number: "29ABCDE1234F1Z5".into(),
            street: "12 MG Road".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            pincode: "560001".into(),
            ..Default::default()
        },
        Customer {
            name: "Meera Iyer".into(),
            phone: "9123456780".into(),
            gst_type: "unregistered".into(),
            city: "Chennai".into(),
            state: "Tamil Nadu".into(),
            pincode: "600004".into(),
            is_active: false,
            ..Default::default()
        },
    ]
}

/// Импорт покупателей из CSV
///
/// Файл целиком отклоняется только при ошибке заголовка. Строки, которые
/// не прошли разбор или валидацию схемы, попадают в `errors`, остальные
/// сохраняются в хранилище.
pub async fn import_customers(
    store: &InMemoryStore<Customer>,
    delay: CommitDelay,
    text: &str,
) -> Result<CustomerImportReport, ApiError> {
    let preview = parse_customer_csv(text)?;
    let mut report = CustomerImportReport {
        imported: 0,
        errors: preview.errors,
    };

    delay.wait().await;

    for accepted in preview.accepted {
        let validation = accepted.customer.validate();
        if !validation.valid {
            let message = validation
                .errors
                .values()
                .cloned()
                .collect::<Vec<_>>()
                .join("; ");
            report.errors.push(RowError {
                row: accepted.row,
                message,
            });
            continue;
        }

        store.upsert(accepted.customer)?;
        report.imported += 1;
    }

    report.errors.sort_by_key(|e| e.row);
    tracing::info!(
        "Customer import: {} imported, {} rejected",
        report.imported,
        report.errors.len()
    );
    Ok(report)
}
