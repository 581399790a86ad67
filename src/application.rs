//! アプリケーション層
//!
//! ユースケースを提供する。

mod scheme_browse;
mod scheme_detail;

pub use scheme_browse::{browse_schemes, BrowseResult};
pub use scheme_detail::find_scheme;
