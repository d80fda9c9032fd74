use contracts::domain::a008_commission_rule::CommissionRule;

pub fn fixtures() -> Vec<CommissionRule> {
    vec![
        CommissionRule {
            name: "Default marketplace fee".into(),
            value: 8.0,
            ..Default::default()
        },
        CommissionRule {
            name: "Electronics".into(),
            value: 5.5,
            category_name: "Electronics".into(),
            min_order_value: Some(1000.0),
            ..Default::default()
        },
        CommissionRule {
            name: "Handling fee".into(),
            rule_type: "fixed".into(),
            value: 25.0,
            ..Default::default()
        },
    ]
}
