//! スキーム詳細取得ユースケース

use crate::catalog::SchemeRecord;
use crate::error::{Result, SchemeError};

/// IDでスキームを1件取得する
pub fn find_scheme(catalog: &[SchemeRecord], id: u32) -> Result<SchemeRecord> {
    catalog
        .iter()
        .find(|s| s.id == id)
        .cloned()
        .ok_or(SchemeError::SchemeNotFound(id))
}

#[cfg(test)]
#[path = "scheme_detail_test.rs"]
mod tests;
