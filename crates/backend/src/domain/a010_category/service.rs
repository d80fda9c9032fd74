use contracts::domain::a010_category::Category;
use contracts::shared::record_store::{InMemoryStore, RecordStore, StoreError};

/// Демонстрационное дерево категорий
///
/// Сначала сохраняются корневые категории, затем дочерние со ссылкой на
/// выданный хранилищем id родителя.
pub fn seed(store: &InMemoryStore<Category>) -> Result<(), StoreError> {
    let roots = [("Apparel", "apparel"), ("Electronics", "electronics")];
    let children = [
        ("Kurtas", "kurtas", "apparel"),
        ("Mobile phones", "mobile-phones", "electronics"),
    ];

    let mut order = 0;
    let mut saved_roots = Vec::new();
    for (name, slug) in roots {
        let saved = store.upsert(Category {
            name: name.into(),
            slug: slug.into(),
            display_order: order,
            ..Default::default()
        })?;
        saved_roots.push(saved);
        order += 1;
    }

    for (name, slug, parent_slug) in children {
        let parent_id = saved_roots
            .iter()
            .find(|c| c.slug == parent_slug)
            .and_then(|c| c.id);
        store.upsert(Category {
            name: name.into(),
            slug: slug.into(),
            parent_id,
            display_order: order,
            ..Default::default()
        })?;
        order += 1;
    }

    Ok(())
}
