//! gsc list コマンド
//!
//! カテゴリのワーキングセットを検索・省庁フィルタで絞り込んで表示する。

use crate::application::{browse_schemes, BrowseResult};
use crate::catalog::load_catalog;
use crate::output::ResultSummary;
use crate::query::SchemeQuery;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Category to browse (e.g. health). Absent shows no schemes; see `gsc categories`
    pub category: Option<String>,

    /// Case-insensitive search over scheme titles and descriptions
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Filter by exact ministry name (see `gsc ministries`; omit for all ministries)
    #[arg(long, short = 'm')]
    pub ministry: Option<String>,

    /// Catalog JSON file (defaults to $GSC_CATALOG, then the builtin catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only scheme titles
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    // 1. カタログをロード
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;

    // 2. カテゴリ選択とフィルタを1回の射影で実行
    let query = build_query(&args);
    let result = browse_schemes(&catalog, args.category.as_deref(), &query);

    // 3. 出力
    if args.json {
        print_json(&result)?;
    } else if args.simple {
        print_simple(&result);
    } else {
        print_table(&result, &query);
    }

    Ok(())
}

fn build_query(args: &Args) -> SchemeQuery {
    let mut query = SchemeQuery::new().with_search(args.search.clone());
    if let Some(ministry) = &args.ministry {
        query = query.with_ministry(ministry.clone());
    }
    query
}

fn print_table(result: &BrowseResult, query: &SchemeQuery) {
    println!("{}", result.heading);
    println!();

    if result.schemes.is_empty() {
        let summary = ResultSummary::format(0, result.total);
        println!("{} {}", summary.prefix, summary.message);
        // フィルタ解除のヒント。カテゴリ引数には触れない
        if !query.is_unfiltered() {
            println!("Run again without --search/--ministry to clear filters");
        }
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Title", "Ministry", "Deadline"]);

    for scheme in &result.schemes {
        let id = scheme.id.to_string();
        table.add_row(vec![
            id.as_str(),
            scheme.title.as_str(),
            scheme.ministry.as_str(),
            scheme.deadline.as_deref().unwrap_or("-"),
        ]);
    }

    println!("{table}");

    let summary = ResultSummary::format(result.schemes.len(), result.total);
    println!("{} {}", summary.prefix, summary.message);
}

fn print_json(result: &BrowseResult) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(&result.schemes)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize schemes: {}", e))
}

fn print_simple(result: &BrowseResult) {
    if result.schemes.is_empty() {
        let summary = ResultSummary::format(0, result.total);
        println!("{} {}", summary.prefix, summary.message);
        return;
    }
    for scheme in &result.schemes {
        println!("{}", scheme.title);
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
