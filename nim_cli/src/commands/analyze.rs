use crate::board::BoardArgs;
use anyhow::Result;
use clap::{self, Parser};
use itertools::Itertools;
use nim::{GameEngine, strategy};

/// Tell whether a board is won for the player to move and list all winning moves.
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    board: BoardArgs,
}

pub fn run(args: Args) -> Result<()> {
    let engine = GameEngine::from_config(args.board.config()?);

    println!("Position: {}", engine.position());
    println!("Items left: {}", engine.total_items());
    println!(
        "Nim-sum: {} ({})",
        engine.nim_sum().value(),
        engine.nim_sum()
    );

    if engine.is_winning_position() {
        let moves = strategy::winning_moves(&engine.counts());
        println!("Winning for the player to move ({} starts)", engine.current_player());
        println!("Winning moves: {}", moves.iter().join("; "));
    } else {
        println!("Losing for the player to move ({} starts)", engine.current_player());
    }
    Ok(())
}
