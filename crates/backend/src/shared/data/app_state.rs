use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Duration;

use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_size_chart::SizeChart;
use contracts::domain::a003_warranty::Warranty;
use contracts::domain::a004_tax_category::TaxCategory;
use contracts::domain::a005_language::Language;
use contracts::domain::a006_store_domain::StoreDomain;
use contracts::domain::a007_faq::Faq;
use contracts::domain::a008_commission_rule::CommissionRule;
use contracts::domain::a009_brand::Brand;
use contracts::domain::a010_category::Category;
use contracts::shared::record_store::{InMemoryStore, StoreError};

use crate::domain;

/// Искусственная задержка перед фиксацией изменений
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitDelay(pub Duration);

impl CommitDelay {
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub async fn wait(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Состояние приложения: по одному хранилищу на коллекцию
///
/// `FromRef` позволяет обработчикам извлекать только нужное хранилище:
/// `State<Arc<InMemoryStore<Warranty>>>`.
#[derive(Clone, Default, FromRef)]
pub struct AppState {
    pub customers: Arc<InMemoryStore<Customer>>,
    pub size_charts: Arc<InMemoryStore<SizeChart>>,
    pub warranties: Arc<InMemoryStore<Warranty>>,
    pub tax_categories: Arc<InMemoryStore<TaxCategory>>,
    pub languages: Arc<InMemoryStore<Language>>,
    pub domains: Arc<InMemoryStore<StoreDomain>>,
    pub faqs: Arc<InMemoryStore<Faq>>,
    pub commission_rules: Arc<InMemoryStore<CommissionRule>>,
    pub brands: Arc<InMemoryStore<Brand>>,
    pub categories: Arc<InMemoryStore<Category>>,
    pub commit_delay: CommitDelay,
}

impl AppState {
    /// Пустые хранилища
    pub fn empty(commit_delay: CommitDelay) -> Self {
        Self {
            commit_delay,
            ..Default::default()
        }
    }

    /// Хранилища с демонстрационными данными
    pub fn seeded(commit_delay: CommitDelay) -> Result<Self, StoreError> {
        let categories = InMemoryStore::new();
        domain::a010_category::service::seed(&categories)?;

        Ok(Self {
            customers: Arc::new(InMemoryStore::with_fixtures(
                domain::a001_customer::service::fixtures(),
            )?),
            size_charts: Arc::new(InMemoryStore::with_fixtures(
                domain::a002_size_chart::service::fixtures(),
            )?),
            warranties: Arc::new(InMemoryStore::with_fixtures(
                domain::a003_warranty::service::fixtures(),
            )?),
            tax_categories: Arc::new(InMemoryStore::with_fixtures(
                domain::a004_tax_category::service::fixtures(),
            )?),
            languages: Arc::new(InMemoryStore::with_fixtures(
                domain::a005_language::service::fixtures(),
            )?),
            domains: Arc::new(InMemoryStore::with_fixtures(
                domain::a006_store_domain::service::fixtures(),
            )?),
            faqs: Arc::new(InMemoryStore::with_fixtures(
                domain::a007_faq::service::fixtures(),
            )?),
            commission_rules: Arc::new(InMemoryStore::with_fixtures(
                domain::a008_commission_rule::service::fixtures(),
            )?),
            brands: Arc::new(InMemoryStore::with_fixtures(
                domain::a009_brand::service::fixtures(),
            )?),
            categories: Arc::new(categories),
            commit_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;
    use contracts::shared::record_store::RecordStore;

    fn all_valid<T: Record>(store: &InMemoryStore<T>) {
        assert!(!store.is_empty(), "{} has no fixtures", T::full_name());
        for record in store.list() {
            let result = record.validate();
            assert!(result.valid, "{}: {:?}", T::full_name(), result.errors);
        }
    }

    #[test]
    fn test_seeded_fixtures_are_valid() {
        let state = AppState::seeded(CommitDelay::none()).unwrap();
        all_valid(&state.customers);
        all_valid(&state.size_charts);
        all_valid(&state.warranties);
        all_valid(&state.tax_categories);
        all_valid(&state.languages);
        all_valid(&state.domains);
        all_valid(&state.faqs);
        all_valid(&state.commission_rules);
        all_valid(&state.brands);
        all_valid(&state.categories);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_delay_waits() {
        let start = tokio::time::Instant::now();
        CommitDelay(Duration::from_millis(1000)).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
