use super::*;
use proptest::prelude::*;

/// カタログ値に使える文字列（英数字とスペース）
fn display_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,19}".prop_map(|s| s)
}

/// 既知カテゴリのいずれか
fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "education".to_string(),
        "health".to_string(),
        "agriculture".to_string(),
        "employment".to_string(),
    ])
}

/// 少数の省庁プールから選ぶ（ファセットの重複が出るように）
fn ministry_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Ministry A".to_string(),
        "Ministry B".to_string(),
        "Ministry C".to_string(),
    ])
}

/// id はカタログ順に採番する（一意性の不変条件を満たすため）
fn catalog_strategy() -> impl Strategy<Value = Vec<SchemeRecord>> {
    prop::collection::vec(
        (
            display_text_strategy(),
            display_text_strategy(),
            category_strategy(),
            ministry_strategy(),
        ),
        0..12,
    )
    .prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (title, description, category, ministry))| SchemeRecord {
                id: i as u32,
                title,
                description,
                eligibility: vec![],
                benefits: vec![],
                deadline: None,
                category,
                ministry,
                link: "https://example.gov/".to_string(),
            })
            .collect()
    })
}

proptest! {
    /// カテゴリ選択の結果はすべて指定カテゴリを持つ
    #[test]
    fn prop_selected_records_carry_category(
        catalog in catalog_strategy(),
        category in category_strategy()
    ) {
        let selected = select_category(&catalog, Some(&category));
        prop_assert!(selected.iter().all(|s| s.category == category));
    }

    /// カテゴリ選択はカタログ順を保つ部分列を返す
    #[test]
    fn prop_selection_is_ordered_subsequence(
        catalog in catalog_strategy(),
        category in category_strategy()
    ) {
        let selected = select_category(&catalog, Some(&category));
        let ids: Vec<u32> = selected.iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        // id は昇順で採番しているので、順序保持 = 昇順
        prop_assert_eq!(ids, sorted);
    }

    /// フィルタは部分列を返す（追加なし、順序保持）
    #[test]
    fn prop_filter_returns_subsequence(
        catalog in catalog_strategy(),
        category in category_strategy(),
        search in "[a-zA-Z]{0,8}"
    ) {
        let working_set = select_category(&catalog, Some(&category));
        let query = SchemeQuery::new().with_search(search);
        let filtered = filter_schemes(&working_set, &query);

        prop_assert!(filtered.len() <= working_set.len());

        // 順序を保ったままワーキングセットに埋め込める
        let mut cursor = working_set.iter();
        for record in &filtered {
            prop_assert!(cursor.any(|w| std::ptr::eq(*w, *record)));
        }
    }

    /// 空クエリは恒等フィルタ
    #[test]
    fn prop_empty_query_is_identity(
        catalog in catalog_strategy(),
        category in category_strategy()
    ) {
        let working_set = select_category(&catalog, Some(&category));
        let filtered = filter_schemes(&working_set, &SchemeQuery::new());
        prop_assert_eq!(filtered.len(), working_set.len());
    }

    /// 複合フィルタは個別述語の積集合
    #[test]
    fn prop_combined_filter_is_intersection(
        catalog in catalog_strategy(),
        category in category_strategy(),
        search in "[a-zA-Z]{0,8}",
        ministry in ministry_strategy()
    ) {
        let working_set = select_category(&catalog, Some(&category));

        let combined = SchemeQuery::new()
            .with_search(search.clone())
            .with_ministry(ministry.clone());
        let by_both = filter_schemes(&working_set, &combined);

        let by_search = filter_schemes(&working_set, &SchemeQuery::new().with_search(search));
        let by_ministry =
            filter_schemes(&working_set, &SchemeQuery::new().with_ministry(ministry));

        let expected: Vec<u32> = by_search
            .iter()
            .filter(|s| by_ministry.iter().any(|m| m.id == s.id))
            .map(|s| s.id)
            .collect();
        let actual: Vec<u32> = by_both.iter().map(|s| s.id).collect();
        prop_assert_eq!(actual, expected);
    }

    /// 検索結果のレコードはタイトルか説明文に検索語を含む
    #[test]
    fn prop_search_hits_contain_term(
        catalog in catalog_strategy(),
        category in category_strategy(),
        search in "[a-zA-Z]{1,8}"
    ) {
        let working_set = select_category(&catalog, Some(&category));
        let query = SchemeQuery::new().with_search(search.clone());
        let filtered = filter_schemes(&working_set, &query);

        let term = search.to_lowercase();
        for record in filtered {
            prop_assert!(
                record.title.to_lowercase().contains(&term)
                    || record.description.to_lowercase().contains(&term)
            );
        }
    }

    /// ファセットは重複なし・初出順
    #[test]
    fn prop_facets_unique_first_occurrence(
        catalog in catalog_strategy(),
        category in category_strategy()
    ) {
        let working_set = select_category(&catalog, Some(&category));
        let ministries = distinct_ministries(&working_set);

        // 重複なし
        let unique: std::collections::HashSet<&String> = ministries.iter().collect();
        prop_assert_eq!(unique.len(), ministries.len());

        // 初出順: 各ファセットはワーキングセット中の初出位置の昇順
        let first_positions: Vec<usize> = ministries
            .iter()
            .map(|m| working_set.iter().position(|s| &s.ministry == m).unwrap())
            .collect();
        let mut sorted = first_positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(first_positions, sorted);
    }
}
