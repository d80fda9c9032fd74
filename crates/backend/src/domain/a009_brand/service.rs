use contracts::domain::a009_brand::{slugify, Brand};

pub fn fixtures() -> Vec<Brand> {
    [
        ("Fab Weaves", "Handloom sarees and dupattas"),
        ("Urban Trek", "Outdoor footwear"),
        ("Kitchen Kraft", ""),
    ]
    .into_iter()
    .map(|(name, description)| Brand {
        name: name.into(),
        slug: slugify(name),
        description: description.into(),
        ..Default::default()
    })
    .collect()
}
