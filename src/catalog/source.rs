//! カタログ取得元の抽象化
//!
//! ## 使い方
//!
//! ```ignore
//! let source = resolve_source(args.catalog.as_deref());
//! let catalog = source.load()?;
//! ```

use super::{builtin_schemes, validate_catalog, SchemeRecord};
use crate::env::EnvVar;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// カタログファイルパスの環境変数
pub const CATALOG_ENV_VAR: &str = "GSC_CATALOG";

/// カタログ取得元の抽象化
///
/// 使う側は取得元が組み込みデータかファイルかを意識せず
/// `load()` を呼ぶだけ。フィルタロジックはこの境界の内側を知らない。
pub trait CatalogSource {
    /// カタログ全件をロードする
    fn load(&self) -> Result<Vec<SchemeRecord>>;
}

/// 組み込みデータソース
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load(&self) -> Result<Vec<SchemeRecord>> {
        Ok(builtin_schemes())
    }
}

/// JSONファイルソース
///
/// ファイルは `SchemeRecord` の配列。ロード時に不変条件を検証する。
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<Vec<SchemeRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<SchemeRecord> = serde_json::from_str(&content)?;
        validate_catalog(&records)?;
        Ok(records)
    }
}

/// カタログ取得元を解決する
///
/// 優先順位: 明示的なパス指定 > 環境変数 GSC_CATALOG > 組み込みデータ
pub fn resolve_source(path: Option<&Path>) -> Box<dyn CatalogSource> {
    if let Some(path) = path {
        return Box::new(FileSource::new(path));
    }

    if let Some(env_path) = EnvVar::get(CATALOG_ENV_VAR) {
        return Box::new(FileSource::new(env_path));
    }

    Box::new(BuiltinSource)
}

/// 取得元を解決してカタログをロードする
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<SchemeRecord>> {
    resolve_source(path).load()
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
