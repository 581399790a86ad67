use super::*;
use crate::catalog::{validate_catalog, KNOWN_CATEGORIES};

#[test]
fn test_builtin_has_eight_records() {
    assert_eq!(builtin_schemes().len(), 8);
}

#[test]
fn test_builtin_satisfies_invariants() {
    assert!(validate_catalog(&builtin_schemes()).is_ok());
}

#[test]
fn test_builtin_two_records_per_category() {
    let schemes = builtin_schemes();
    for category in KNOWN_CATEGORIES {
        let count = schemes.iter().filter(|s| s.category == *category).count();
        assert_eq!(count, 2, "category {} should have 2 schemes", category);
    }
}

#[test]
fn test_builtin_categories_are_known() {
    for scheme in builtin_schemes() {
        assert!(
            KNOWN_CATEGORIES.contains(&scheme.category.as_str()),
            "unknown category {} on scheme {}",
            scheme.category,
            scheme.id
        );
    }
}

#[test]
fn test_builtin_health_records() {
    let schemes = builtin_schemes();
    let health: Vec<_> = schemes.iter().filter(|s| s.category == "health").collect();
    assert_eq!(health[0].id, 3);
    assert_eq!(health[0].title, "Ayushman Bharat PM-JAY");
    assert_eq!(health[1].id, 4);
    // 両方とも同じ省庁
    assert_eq!(health[0].ministry, "Ministry of Health and Family Welfare");
    assert_eq!(health[1].ministry, "Ministry of Health and Family Welfare");
}

#[test]
fn test_builtin_deadline_presence() {
    let schemes = builtin_schemes();
    // id=1 は期限あり、id=3 は期限なし
    assert!(schemes.iter().find(|s| s.id == 1).unwrap().deadline.is_some());
    assert!(schemes.iter().find(|s| s.id == 3).unwrap().deadline.is_none());
}
