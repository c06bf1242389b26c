use crate::board::BoardArgs;
use anyhow::Result;
use clap::{self, Parser};
use nim::{GameEngine, Move, numeric::nimber::Nimber};
use serde::Serialize;

/// Print the move the computer would make on a given board.
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    board: BoardArgs,

    /// Print result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Output {
    piles: Vec<u32>,
    nim_sum: Nimber,
    best_move: Option<Move>,
}

pub fn run(args: Args) -> Result<()> {
    let engine = GameEngine::from_config(args.board.config()?);
    let output = Output {
        piles: engine.counts(),
        nim_sum: engine.nim_sum(),
        best_move: engine.calculate_best_move(),
    };

    if args.json {
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("Position: {}", engine.position());
    println!("Nim-sum: {}", output.nim_sum.value());
    match output.best_move {
        Some(m) => println!("Best move: {m}"),
        None => println!("Nothing left to take"),
    }
    Ok(())
}
