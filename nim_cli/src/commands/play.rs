use crate::board::BoardArgs;
use anyhow::{Context, Result};
use clap::{self, Parser};
use nim::{GameEngine, GameState, Player};
use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

/// Play against the computer in the terminal.
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    board: BoardArgs,

    /// How long the computer pretends to think before moving, in milliseconds
    #[arg(long, default_value_t = 800)]
    delay_ms: u64,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Move { pile: usize, amount: u32 },
    Hint,
    Reset,
    Quit,
}

fn parse_input(line: &str) -> Result<Input, &'static str> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("q" | "quit"), None, None) => Ok(Input::Quit),
        (Some("r" | "reset"), None, None) => Ok(Input::Reset),
        (Some("h" | "hint"), None, None) => Ok(Input::Hint),
        (Some(pile), Some(amount), None) => {
            let pile = pile.parse::<usize>().map_err(|_| "Pile must be a number")?;
            let amount = amount
                .parse::<u32>()
                .map_err(|_| "Amount must be a positive number")?;
            if pile == 0 {
                return Err("Piles are numbered from 1");
            }
            Ok(Input::Move {
                pile: pile - 1,
                amount,
            })
        }
        _ => Err("Enter '<pile> <amount>', 'h' for a hint, 'r' to restart or 'q' to quit"),
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    lines.next().transpose().context("Could not read from stdin")
}

pub fn run(args: Args) -> Result<()> {
    let mut engine = GameEngine::from_config(args.board.config()?);
    let delay = Duration::from_millis(args.delay_ms);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Nim: {}", engine.initial_config());
    println!("Take any number of items from one pile. Whoever takes the last item wins.");

    loop {
        println!();
        print!("{engine}");

        match engine.state() {
            GameState::Over => {
                match engine.winner() {
                    Some(Player::Human) => println!("You took the last item. You win!"),
                    Some(Player::Computer) => {
                        println!("The computer took the last item. You lose.");
                    }
                    None => println!("Nothing to play on this board."),
                }

                match prompt(&mut lines, "Play again? [y/N] ")? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                        engine.reset(None, None);
                    }
                    _ => break,
                }
            }
            GameState::ComputerTurn => {
                println!("Computer is thinking...");
                log::debug!("Computer waits {} ms before moving", delay.as_millis());
                thread::sleep(delay);
                let m = engine
                    .make_ai_move()
                    .context("Computer could not find a move")?;
                println!("Computer: {m}");
            }
            GameState::HumanTurn => {
                let Some(line) = prompt(&mut lines, "Your move (<pile> <amount>): ")? else {
                    break;
                };

                match parse_input(&line) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Reset) => engine.reset(None, None),
                    Ok(Input::Hint) => match engine.calculate_best_move() {
                        Some(m) if engine.is_winning_position() => println!("Hint: {m}"),
                        Some(m) => println!("Hint: no winning move, try to {m} and hope"),
                        None => println!("Hint: nothing to take"),
                    },
                    Ok(Input::Move { pile, amount }) => {
                        if let Err(err) = engine.user_move(pile, amount) {
                            println!("{err}");
                        }
                    }
                    Err(msg) => println!("{msg}"),
                }
            }
        }
    }

    Ok(())
}
