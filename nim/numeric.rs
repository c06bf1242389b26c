//! Numeric types used by the game

pub mod nimber;
