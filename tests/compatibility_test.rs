use plat_du_jour_rs::models::{Course, Menu};
use plat_du_jour_rs::planner::{Condition, Rule, RuleSet};

#[test]
fn test_fish_with_pasta_rejected() {
    assert!(!Menu::new("fish", "pasta", "none").is_digestible());
}

#[test]
fn test_pork_potato_with_snack_rejected() {
    assert!(!Menu::new("pork", "potato", "bread").is_digestible());
    // No snack makes pork and potato acceptable
    assert!(Menu::new("pork", "potato", "none").is_digestible());
}

#[test]
fn test_pasta_with_bread_rejected() {
    assert!(!Menu::new("chicken", "pasta", "bread").is_digestible());
}

#[test]
fn test_plain_menu_accepted() {
    assert!(Menu::new("chicken", "rice", "bread").is_digestible());
}

#[test]
fn test_rule_order_does_not_matter() {
    let mut rules = RuleSet::default().rules().to_vec();
    rules.reverse();
    let reversed = RuleSet::new(rules);

    let menus = [
        Menu::new("fish", "pasta", "none"),
        Menu::new("pork", "potato", "cheese"),
        Menu::new("beef", "vegs", "mayonnaise"),
        Menu::new("chicken", "pasta", "bread"),
    ];

    for menu in &menus {
        assert_eq!(
            RuleSet::default().is_digestible(menu),
            reversed.is_digestible(menu),
            "rule order changed verdict for {}",
            menu
        );
    }
}

#[test]
fn test_custom_rule() {
    let rules = RuleSet::new(vec![Rule::new(vec![
        Condition::is(Course::Main, "beef"),
        Condition::is_not(Course::Staple, "rice"),
    ])]);

    assert!(!rules.is_digestible(&Menu::new("beef", "vegs", "none")));
    assert!(rules.is_digestible(&Menu::new("beef", "rice", "none")));
    assert!(rules.is_digestible(&Menu::new("fish", "pasta", "bread")));
}
