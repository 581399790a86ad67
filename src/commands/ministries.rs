//! gsc ministries コマンド
//!
//! カテゴリのワーキングセットから省庁ファセットを抽出して表示する。
//! `list --ministry` に渡せる値の一覧。省略（= すべての省庁）は常に選べる。

use crate::catalog::load_catalog;
use crate::query::{distinct_ministries, select_category};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Category to extract ministries from
    pub category: Option<String>,

    /// Catalog JSON file (defaults to $GSC_CATALOG, then the builtin catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;

    let working_set = select_category(&catalog, args.category.as_deref());
    let ministries = distinct_ministries(&working_set);

    if args.json {
        print_json(&ministries)?;
    } else {
        for ministry in &ministries {
            println!("{}", ministry);
        }
    }

    Ok(())
}

fn print_json(ministries: &[String]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(ministries)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize ministries: {}", e))
}
