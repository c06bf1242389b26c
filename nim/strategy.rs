//! Perfect play under the normal-play convention.
//!
//! A position is lost for the player to move exactly when the [Nim-sum](nim_sum) of all pile
//! sizes is zero. From any other position there is a move that restores a zero Nim-sum, and the
//! opponent can never do the same in return.

use crate::numeric::nimber::Nimber;
use std::fmt::Display;

/// Removal of `amount` items from the pile at `pile_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Zero-based index of the pile
    pub pile_index: usize,

    /// Number of items to take, always positive
    pub amount: u32,
}

impl Move {
    /// Construct new move
    #[inline]
    pub const fn new(pile_index: usize, amount: u32) -> Self {
        Self { pile_index, amount }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.amount, self.pile_index + 1)
    }
}

/// Bitwise xor of all pile sizes
pub fn nim_sum(counts: &[u32]) -> Nimber {
    counts.iter().copied().map(Nimber::new).sum()
}

/// Every move that leaves a position with zero Nim-sum, at most one per pile, in pile order.
/// Empty when the position is already lost.
pub fn winning_moves(counts: &[u32]) -> Vec<Move> {
    let total = nim_sum(counts);
    if total.is_zero() {
        return Vec::new();
    }

    counts
        .iter()
        .enumerate()
        .filter_map(|(pile_index, &count)| {
            let target = (Nimber::new(count) + total).value();
            (target < count).then(|| Move::new(pile_index, count - target))
        })
        .collect()
}

/// Deterministic perfect move.
///
/// With nonzero Nim-sum this is the first of [`winning_moves`]. With zero Nim-sum every move
/// loses against perfect play, so a single item is taken from the first nonempty pile.
/// Returns `None` only when all piles are empty.
pub fn best_move(counts: &[u32]) -> Option<Move> {
    let total = nim_sum(counts);

    if total.is_zero() {
        return counts
            .iter()
            .position(|&count| count > 0)
            .map(|pile_index| Move::new(pile_index, 1));
    }

    counts.iter().enumerate().find_map(|(pile_index, &count)| {
        let target = (Nimber::new(count) + total).value();
        (target < count).then(|| Move::new(pile_index, count - target))
    })
}
