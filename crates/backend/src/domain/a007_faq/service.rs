use contracts::domain::a007_faq::Faq;

pub fn fixtures() -> Vec<Faq> {
    [
        (
            "How long does delivery take?",
            "Orders ship within 2 business days and arrive in 3 to 7 days.",
            "Shipping",
        ),
        (
            "Can I return an item?",
            "Unused items can be returned within 15 days of delivery.",
            "Returns",
        ),
        (
            "Do you issue GST invoices?",
            "Yes. Add your GSTIN at checkout to receive a tax invoice.",
            "Billing",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (question, answer, category))| Faq {
        question: question.into(),
        answer: answer.into(),
        category: category.into(),
        display_order: i as i32,
        ..Default::default()
    })
    .collect()
}
