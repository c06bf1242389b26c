//! Impartial game - both players have the same moves

use crate::{display, numeric::nimber::Nimber, pile::Pile};
use std::fmt::Display;

/// Impartial game
pub trait ImpartialGame: Sized {
    /// Get a list of moves from the position
    fn moves(&self) -> Vec<Self>;

    /// Calculate the Nim value of the position by Sprague-Grundy recursion
    fn nim_value(&self) -> Nimber {
        let moves = self.moves();
        let mut game_moves = Vec::with_capacity(moves.len());
        for m in moves {
            game_moves.push(m.nim_value());
        }
        Nimber::mex(game_moves)
    }
}

/// Snapshot of pile sizes, detached from any game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NimPosition {
    heaps: Vec<u32>,
}

impl Display for NimPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nim")?;
        display::brackets(f, |f| display::commas(f, self.heaps()))
    }
}

impl NimPosition {
    /// Create new position from heap sizes
    #[inline]
    pub fn new(heaps: Vec<u32>) -> Self {
        Self { heaps }
    }

    /// Take a snapshot of the board
    pub fn from_piles(piles: &[Pile]) -> Self {
        Self::new(piles.iter().map(Pile::count).collect())
    }

    /// Get the heap sizes
    #[inline]
    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }
}

impl ImpartialGame for NimPosition {
    fn moves(&self) -> Vec<Self> {
        let mut moves = Vec::with_capacity(self.heaps.iter().map(|&h| h as usize).sum());
        for (idx, &heap) in self.heaps.iter().enumerate() {
            for left in 0..heap {
                let mut new = self.clone();
                new.heaps[idx] = left;
                moves.push(new);
            }
        }
        moves
    }
}
