use crate::cli::Command;

pub mod categories;
pub mod list;
pub mod ministries;
pub mod show;

pub fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::List(args) => list::run(args),
        Command::Show(args) => show::run(args),
        Command::Ministries(args) => ministries::run(args),
        Command::Categories(args) => categories::run(args),
    }
}
