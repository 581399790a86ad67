//! スキームカタログ
//!
//! スキームレコードのデータモデルと、カタログの取得元
//! （組み込みデータ / JSONファイル）を提供する。

mod builtin;
mod source;

pub use builtin::builtin_schemes;
pub use source::{load_catalog, resolve_source, BuiltinSource, CatalogSource, FileSource};

use crate::error::{Result, SchemeError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// ナビゲーション対象の既知カテゴリ（カタログ上の `category` 値はここから取る）
pub const KNOWN_CATEGORIES: &[&str] = &["education", "health", "agriculture", "employment"];

/// 政府支援スキームのレコード
///
/// カタログ構築後は不変。表示・フィルタの対象となる全フィールドを持つ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeRecord {
    /// カタログ内で一意なID
    pub id: u32,
    /// スキーム名
    pub title: String,
    /// 説明文
    pub description: String,
    /// 受給資格（表示順を保持）
    pub eligibility: Vec<String>,
    /// 給付内容（表示順を保持）
    pub benefits: Vec<String>,
    /// 申請期限。None は「期限なし」を意味する（「不明」ではない）
    #[serde(default)]
    pub deadline: Option<String>,
    /// カテゴリ（小文字）
    pub category: String,
    /// 所管省庁
    pub ministry: String,
    /// 公式サイトURL
    pub link: String,
}

/// カタログ不変条件の検証
///
/// - `id` はカタログ全体で一意
/// - `title`, `ministry`, `link` は非空
/// - `category` は小文字
///
/// 組み込みデータは構築時点で満たしている。ファイル由来の
/// カタログはロード時にここを通す。
pub fn validate_catalog(records: &[SchemeRecord]) -> Result<()> {
    let mut seen_ids = HashSet::new();

    for record in records {
        if !seen_ids.insert(record.id) {
            return Err(SchemeError::InvalidCatalog(format!(
                "duplicate id {}",
                record.id
            )));
        }
        if record.title.is_empty() {
            return Err(SchemeError::InvalidCatalog(format!(
                "scheme {} has an empty title",
                record.id
            )));
        }
        if record.ministry.is_empty() {
            return Err(SchemeError::InvalidCatalog(format!(
                "scheme {} has an empty ministry",
                record.id
            )));
        }
        if record.link.is_empty() {
            return Err(SchemeError::InvalidCatalog(format!(
                "scheme {} has an empty link",
                record.id
            )));
        }
        if record.category != record.category.to_lowercase() {
            return Err(SchemeError::InvalidCatalog(format!(
                "scheme {} has a non-lowercase category: {}",
                record.id, record.category
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
