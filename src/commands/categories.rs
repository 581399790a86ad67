//! gsc categories コマンド
//!
//! 既知カテゴリと収録件数を表示する。`list` のカテゴリ引数に渡せる値の一覧。

use crate::catalog::{load_catalog, SchemeRecord, KNOWN_CATEGORIES};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Catalog JSON file (defaults to $GSC_CATALOG, then the builtin catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// カテゴリと収録件数（出力用）
#[derive(Debug, Clone, Serialize)]
struct CategoryCount {
    category: String,
    schemes: usize,
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;
    let counts = count_by_category(&catalog);

    if args.json {
        print_json(&counts)?;
    } else {
        print_table(&counts);
    }

    Ok(())
}

/// 既知カテゴリごとの件数を数える
///
/// 収録0件のカテゴリも一覧に残す。
fn count_by_category(catalog: &[SchemeRecord]) -> Vec<CategoryCount> {
    KNOWN_CATEGORIES
        .iter()
        .map(|category| CategoryCount {
            category: category.to_string(),
            schemes: catalog.iter().filter(|s| s.category == *category).count(),
        })
        .collect()
}

fn print_table(counts: &[CategoryCount]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Category", "Schemes"]);

    for count in counts {
        let schemes = count.schemes.to_string();
        table.add_row(vec![count.category.as_str(), schemes.as_str()]);
    }

    println!("{table}");
}

fn print_json(counts: &[CategoryCount]) -> Result<(), String> {
    serde_json::to_string_pretty(counts)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize categories: {}", e))
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
