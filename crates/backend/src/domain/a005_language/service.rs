use contracts::domain::a005_language::Language;

pub fn fixtures() -> Vec<Language> {
    [("English", "en-IN", true), ("Hindi", "hi", false), ("Tamil", "ta", false)]
        .into_iter()
        .enumerate()
        .map(|(i, (name, code, is_default))| Language {
            name: name.into(),
            code: code.into(),
            is_default,
            display_order: i as i32,
            ..Default::default()
        })
        .collect()
}
