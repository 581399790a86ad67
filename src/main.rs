mod application;
mod catalog;
mod cli;
mod commands;
mod env;
mod error;
mod output;
mod query;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
