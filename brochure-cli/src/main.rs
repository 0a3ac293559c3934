use anyhow::Result;
use clap::Command;

mod cmd;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("brochure")
        .about("Build a complete small-business website from one config file")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::build::make_subcommand())
        .subcommand(cmd::preview::make_subcommand())
        .get_matches();

    match matches.subcommand() {
        Some(("build", args)) => cmd::build::execute(args),
        Some(("preview", args)) => cmd::preview::execute(args).await,
        _ => unreachable!("subcommand is required"),
    }
}
