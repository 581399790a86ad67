//! カタログ問い合わせロジック
//!
//! カテゴリ選択・検索/省庁フィルタ・省庁ファセット抽出を提供する。
//! すべて借用したレコード列上の純粋関数で、呼び出しごとに再計算しても
//! 結果は入力のみで決まる。

use crate::catalog::SchemeRecord;
use std::collections::HashSet;

/// 検索条件の値オブジェクト
///
/// - `search`: タイトル・説明文に対する case-insensitive 部分一致。
///   空文字列は全件一致。
/// - `ministry`: 省庁名の完全一致。None はフィルタなし。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeQuery {
    pub search: String,
    pub ministry: Option<String>,
}

impl SchemeQuery {
    /// フィルタなしの条件を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 検索語を設定
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// 省庁フィルタを設定
    pub fn with_ministry(mut self, ministry: impl Into<String>) -> Self {
        self.ministry = Some(ministry.into());
        self
    }

    /// 両フィルタとも未設定かどうか（= 恒等フィルタ）
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.ministry.is_none()
    }

    /// レコードが条件に一致するか
    ///
    /// 検索と省庁の両方に一致した場合のみ true。
    pub fn matches(&self, scheme: &SchemeRecord) -> bool {
        let query = self.search.to_lowercase();
        let matches_search = scheme.title.to_lowercase().contains(&query)
            || scheme.description.to_lowercase().contains(&query);
        let matches_ministry = match &self.ministry {
            Some(ministry) => scheme.ministry == *ministry,
            None => true,
        };

        matches_search && matches_ministry
    }
}

/// カテゴリトークンでワーキングセットを選択する
///
/// - トークンは小文字化して `category` と比較（カタログ側は小文字済み）
/// - トークンなしは空集合（全件表示へのフォールバックはしない）
/// - 未知のカテゴリもエラーにせず空集合
/// - カタログ順を保持
pub fn select_category<'a>(
    catalog: &'a [SchemeRecord],
    token: Option<&str>,
) -> Vec<&'a SchemeRecord> {
    let Some(token) = token else {
        return Vec::new();
    };

    let token = token.to_lowercase();
    catalog.iter().filter(|s| s.category == token).collect()
}

/// ワーキングセットを検索条件で絞り込む
///
/// ワンパスで評価し、入力の順序を保持する。
pub fn filter_schemes<'a>(
    schemes: &[&'a SchemeRecord],
    query: &SchemeQuery,
) -> Vec<&'a SchemeRecord> {
    schemes.iter().filter(|s| query.matches(s)).copied().collect()
}

/// ワーキングセット中の省庁を重複なしで抽出する
///
/// 初出順を保持する。フィルタ選択肢（「すべての省庁」に相当する
/// フィルタなしは呼び出し側が常に提供する）の列挙に使う。
pub fn distinct_ministries(schemes: &[&SchemeRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ministries = Vec::new();

    for scheme in schemes {
        if seen.insert(scheme.ministry.as_str()) {
            ministries.push(scheme.ministry.clone());
        }
    }

    ministries
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;

#[cfg(test)]
#[path = "query_proptests.rs"]
mod proptests;
