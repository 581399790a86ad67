use super::*;
use crate::catalog::builtin_schemes;

fn make_scheme(id: u32, title: &str, description: &str, ministry: &str) -> SchemeRecord {
    SchemeRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        eligibility: vec![],
        benefits: vec![],
        deadline: None,
        category: "health".to_string(),
        ministry: ministry.to_string(),
        link: "https://example.gov/".to_string(),
    }
}

// ========================================
// select_category tests
// ========================================

#[test]
fn test_select_category_exact_match() {
    let catalog = builtin_schemes();
    let selected = select_category(&catalog, Some("health"));

    assert_eq!(selected.len(), 2);
    assert!(selected.iter().all(|s| s.category == "health"));
}

#[test]
fn test_select_category_case_insensitive_token() {
    let catalog = builtin_schemes();
    let selected = select_category(&catalog, Some("HeAlTh"));
    assert_eq!(selected.len(), 2);
}

#[test]
fn test_select_category_preserves_catalog_order() {
    let catalog = builtin_schemes();
    let selected = select_category(&catalog, Some("agriculture"));
    assert_eq!(selected[0].id, 5);
    assert_eq!(selected[1].id, 6);
}

#[test]
fn test_select_category_absent_token_yields_empty() {
    // カテゴリなしは全件ではなく空（観測された挙動を維持）
    let catalog = builtin_schemes();
    assert!(select_category(&catalog, None).is_empty());
}

#[test]
fn test_select_category_empty_token_yields_empty() {
    let catalog = builtin_schemes();
    assert!(select_category(&catalog, Some("")).is_empty());
}

#[test]
fn test_select_category_unknown_token_yields_empty() {
    let catalog = builtin_schemes();
    assert!(select_category(&catalog, Some("housing")).is_empty());
}

// ========================================
// SchemeQuery tests
// ========================================

#[test]
fn test_query_empty_matches_everything() {
    let scheme = make_scheme(1, "Some Scheme", "Does things.", "Ministry A");
    assert!(SchemeQuery::new().matches(&scheme));
}

#[test]
fn test_query_search_matches_title() {
    let scheme = make_scheme(1, "Health Insurance Scheme", "Coverage.", "Ministry A");
    let query = SchemeQuery::new().with_search("insurance");
    assert!(query.matches(&scheme));
}

#[test]
fn test_query_search_matches_description() {
    let scheme = make_scheme(1, "Scheme", "Free antenatal check-ups.", "Ministry A");
    let query = SchemeQuery::new().with_search("ANTENATAL");
    assert!(query.matches(&scheme));
}

#[test]
fn test_query_search_no_match() {
    let scheme = make_scheme(1, "Scheme", "Description.", "Ministry A");
    let query = SchemeQuery::new().with_search("xyz123");
    assert!(!query.matches(&scheme));
}

#[test]
fn test_query_ministry_exact_match() {
    let scheme = make_scheme(1, "Scheme", "Description.", "Ministry A");
    assert!(SchemeQuery::new().with_ministry("Ministry A").matches(&scheme));
    assert!(!SchemeQuery::new().with_ministry("Ministry B").matches(&scheme));
}

#[test]
fn test_query_ministry_is_case_sensitive() {
    // 省庁フィルタはファセット一覧から選ばれる値なので完全一致
    let scheme = make_scheme(1, "Scheme", "Description.", "Ministry A");
    assert!(!SchemeQuery::new().with_ministry("ministry a").matches(&scheme));
}

#[test]
fn test_query_requires_both_predicates() {
    let scheme = make_scheme(1, "Health Scheme", "Description.", "Ministry A");

    // 検索一致・省庁不一致
    let query = SchemeQuery::new()
        .with_search("health")
        .with_ministry("Ministry B");
    assert!(!query.matches(&scheme));

    // 検索不一致・省庁一致
    let query = SchemeQuery::new()
        .with_search("xyz")
        .with_ministry("Ministry A");
    assert!(!query.matches(&scheme));

    // 両方一致
    let query = SchemeQuery::new()
        .with_search("health")
        .with_ministry("Ministry A");
    assert!(query.matches(&scheme));
}

#[test]
fn test_query_is_unfiltered() {
    assert!(SchemeQuery::new().is_unfiltered());
    assert!(!SchemeQuery::new().with_search("x").is_unfiltered());
    assert!(!SchemeQuery::new().with_ministry("M").is_unfiltered());
}

// ========================================
// filter_schemes tests
// ========================================

#[test]
fn test_filter_empty_query_is_identity() {
    let catalog = builtin_schemes();
    let working_set = select_category(&catalog, Some("education"));
    let filtered = filter_schemes(&working_set, &SchemeQuery::new());
    assert_eq!(filtered.len(), working_set.len());
}

#[test]
fn test_filter_preserves_order() {
    let catalog = builtin_schemes();
    let working_set = select_category(&catalog, Some("employment"));
    let filtered = filter_schemes(&working_set, &SchemeQuery::new().with_search("pradhan"));

    let ids: Vec<u32> = filtered.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![7, 8]);
}

// ========================================
// health category walk-through
// ========================================

#[test]
fn test_health_scenario() {
    let catalog = builtin_schemes();

    // カテゴリ "health" → id 3, 4
    let working_set = select_category(&catalog, Some("health"));
    let ids: Vec<u32> = working_set.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 4]);

    // "Ayushman" 検索 → id 3 のみ
    let searched = filter_schemes(&working_set, &SchemeQuery::new().with_search("Ayushman"));
    let ids: Vec<u32> = searched.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3]);

    // 省庁フィルタのみ → 両方とも同じ省庁なので id 3, 4
    let by_ministry = filter_schemes(
        &working_set,
        &SchemeQuery::new().with_ministry("Ministry of Health and Family Welfare"),
    );
    let ids: Vec<u32> = by_ministry.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 4]);

    // 一致しない検索 → 空
    let none = filter_schemes(&working_set, &SchemeQuery::new().with_search("xyz123"));
    assert!(none.is_empty());

    // フィルタ解除でワーキングセット全体に戻る（カテゴリ選択は不変）
    let cleared = filter_schemes(&working_set, &SchemeQuery::new());
    let ids: Vec<u32> = cleared.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 4]);
}

// ========================================
// distinct_ministries tests
// ========================================

#[test]
fn test_distinct_ministries_no_duplicates() {
    let catalog = builtin_schemes();
    let working_set = select_category(&catalog, Some("health"));
    let ministries = distinct_ministries(&working_set);

    // 2件とも同じ省庁なので1件に畳まれる
    assert_eq!(
        ministries,
        vec!["Ministry of Health and Family Welfare".to_string()]
    );
}

#[test]
fn test_distinct_ministries_first_occurrence_order() {
    let a = make_scheme(1, "A", "", "Ministry B");
    let b = make_scheme(2, "B", "", "Ministry A");
    let c = make_scheme(3, "C", "", "Ministry B");
    let working_set: Vec<&SchemeRecord> = vec![&a, &b, &c];

    let ministries = distinct_ministries(&working_set);
    assert_eq!(
        ministries,
        vec!["Ministry B".to_string(), "Ministry A".to_string()]
    );
}

#[test]
fn test_distinct_ministries_empty_set() {
    assert!(distinct_ministries(&[]).is_empty());
}

#[test]
fn test_distinct_ministries_employment_has_two() {
    let catalog = builtin_schemes();
    let working_set = select_category(&catalog, Some("employment"));
    let ministries = distinct_ministries(&working_set);
    assert_eq!(
        ministries,
        vec![
            "Ministry of Finance".to_string(),
            "Ministry of Skill Development & Entrepreneurship".to_string()
        ]
    );
}
