use contracts::domain::a004_tax_category::TaxCategory;

/// Ставки GST для основных товарных групп
pub fn fixtures() -> Vec<TaxCategory> {
    [
        ("Exempt", 0.0, "0401", "Fresh milk and dairy"),
        ("GST 5%", 5.0, "6109", "Apparel up to 1000 INR"),
        ("GST 12%", 12.0, "6203", "Apparel above 1000 INR"),
        ("GST 18%", 18.0, "8471", "Computers and accessories"),
        ("GST 28%", 28.0, "8703", "Motor vehicles"),
    ]
    .into_iter()
    .map(|(name, rate, hsn, description)| TaxCategory {
        name: name.into(),
        rate,
        hsn_code: hsn.into(),
        description: description.into(),
        ..Default::default()
    })
    .collect()
}
