use clap::{Parser, Subcommand};

use crate::commands::{categories, list, ministries, show};

#[derive(Debug, Parser)]
#[command(name = "gsc")]
#[command(about = "Government Scheme Catalog CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// カテゴリ内のスキーム一覧を表示
    List(list::Args),

    /// スキームの詳細表示
    Show(show::Args),

    /// カテゴリ内の省庁ファセット一覧
    Ministries(ministries::Args),

    /// 既知カテゴリと収録件数の一覧
    Categories(categories::Args),
}
