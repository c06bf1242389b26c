use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};
use flexi_logger::Logger;

mod board;
mod commands;

#[derive(Subcommand, Debug)]
enum Command {
    Play(play::Args),
    BestMove(best_move::Args),
    Analyze(analyze::Args),
}

#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    let args = Args::parse();
    match args.command {
        Command::Play(args) => play::run(args),
        Command::BestMove(args) => best_move::run(args),
        Command::Analyze(args) => analyze::run(args),
    }
}
