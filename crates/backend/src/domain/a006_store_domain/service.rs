use contracts::domain::a006_store_domain::StoreDomain;

pub fn fixtures() -> Vec<StoreDomain> {
    vec![
        StoreDomain {
            host: "shop.example.in".into(),
            is_primary: true,
            ssl_status: "active".into(),
            ..Default::default()
        },
        StoreDomain {
            host: "www.shop.example.in".into(),
            ..Default::default()
        },
    ]
}
