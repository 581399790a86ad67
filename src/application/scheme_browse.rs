//! カタログ閲覧ユースケース
//!
//! カテゴリ選択 → 検索/省庁フィルタ → ファセット抽出を1回の
//! 純粋な射影として実行し、表示用DTOに詰めて返す。

use crate::catalog::SchemeRecord;
use crate::output::category_heading;
use crate::query::{distinct_ministries, filter_schemes, select_category, SchemeQuery};
use serde::Serialize;

/// 閲覧結果（DTO）
#[derive(Debug, Clone, Serialize)]
pub struct BrowseResult {
    /// カテゴリ見出し
    pub heading: String,
    /// フィルタ前のワーキングセット件数
    pub total: usize,
    /// フィルタ適用後のスキーム一覧（カタログ順）
    pub schemes: Vec<SchemeRecord>,
    /// ワーキングセット中の省庁ファセット（初出順、フィルタ適用前に抽出）
    pub ministries: Vec<String>,
}

/// カタログを閲覧する
///
/// 3つの入力（カテゴリトークン・検索語・省庁フィルタ）とカタログのみで
/// 結果が決まる。入力のどれが変わっても全体を再計算してよい。
pub fn browse_schemes(
    catalog: &[SchemeRecord],
    category: Option<&str>,
    query: &SchemeQuery,
) -> BrowseResult {
    let working_set = select_category(catalog, category);
    let ministries = distinct_ministries(&working_set);
    let filtered = filter_schemes(&working_set, query);

    BrowseResult {
        heading: category_heading(category),
        total: working_set.len(),
        schemes: filtered.into_iter().cloned().collect(),
        ministries,
    }
}

#[cfg(test)]
#[path = "scheme_browse_test.rs"]
mod tests;
