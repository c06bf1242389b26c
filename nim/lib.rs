//! Nim game engine.
//!
//! The crate keeps the state of a human-vs-computer game of [Nim](crate::engine) played under
//! the normal-play convention and computes perfect moves for the computer using the
//! [Nim-sum](crate::strategy::nim_sum). Presentation is left to the caller: the engine exposes
//! plain state queries and command methods only.

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod impartial;
pub mod numeric;
pub mod parsing;
pub mod pile;
pub mod player;
pub mod strategy;

mod display;

pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, GameState};
pub use pile::{MoveError, Pile};
pub use player::Player;
pub use strategy::Move;
