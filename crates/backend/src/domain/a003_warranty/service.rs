use contracts::domain::a003_warranty::Warranty;

/// Демонстрационные гарантийные условия
pub fn fixtures() -> Vec<Warranty> {
    vec![
        Warranty {
            name: "Standard manufacturer warranty".into(),
            duration_months: 12,
            description: "Covers manufacturing defects. Physical damage is excluded.".into(),
            ..Default::default()
        },
        Warranty {
            name: "Extended electronics warranty".into(),
            duration_months: 24,
            description: "Repair or replacement at an authorised service centre.".into(),
            ..Default::default()
        },
        Warranty {
            name: "Seasonal apparel guarantee".into(),
            duration_months: 3,
            is_active: false,
            ..Default::default()
        },
    ]
}
