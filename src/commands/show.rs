//! gsc show コマンド
//!
//! スキーム1件の詳細をカード形式で表示する。

use crate::application::find_scheme;
use crate::catalog::{load_catalog, SchemeRecord};
use crate::output::deadline_badge;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Scheme id
    pub id: u32,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Catalog JSON file (defaults to $GSC_CATALOG, then the builtin catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;
    let scheme = find_scheme(&catalog, args.id).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Table => print_card(&scheme),
        OutputFormat::Json => print_json(&scheme)?,
        OutputFormat::Yaml => print_yaml(&scheme)?,
    }

    Ok(())
}

fn print_card(scheme: &SchemeRecord) {
    // 基本情報
    println!("{}", scheme.title);
    if let Some(deadline) = &scheme.deadline {
        println!("{}", deadline_badge(deadline));
    }
    println!();
    println!("{}", scheme.description);
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    let id = scheme.id.to_string();
    table.add_row(vec!["Id", &id]);
    table.add_row(vec!["Category", &scheme.category]);
    table.add_row(vec!["Ministry", &scheme.ministry]);
    table.add_row(vec![
        "Deadline",
        scheme.deadline.as_deref().unwrap_or("None"),
    ]);

    println!("{table}");
    println!();

    // 受給資格
    println!("Eligibility");
    println!("-----------");
    print_bullets(&scheme.eligibility);
    println!();

    // 給付内容
    println!("Benefits");
    println!("--------");
    print_bullets(&scheme.benefits);
    println!();

    // 公式サイト（リンクは表示のみ。ブラウザ属性に相当するものはない）
    println!("Official website: {}", scheme.link);
}

fn print_bullets(items: &[String]) {
    if items.is_empty() {
        println!("none");
        return;
    }
    for item in items {
        println!("- {}", item);
    }
}

fn print_json(scheme: &SchemeRecord) -> Result<(), String> {
    serde_json::to_string_pretty(scheme)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize to JSON: {}", e))
}

fn print_yaml(scheme: &SchemeRecord) -> Result<(), String> {
    serde_yaml::to_string(scheme)
        .map(|yaml| print!("{yaml}"))
        .map_err(|e| format!("Failed to serialize to YAML: {}", e))
}

#[cfg(test)]
#[path = "show_test.rs"]
mod tests;
