//! Single Nim heap

use crate::{numeric::nimber::Nimber, player::Player};
use std::fmt::Display;
use thiserror::Error;

/// Reason why a move was rejected. Rejected moves never change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// At least one item has to be taken
    #[error("Cannot remove zero items")]
    ZeroAmount,

    /// Pile holds fewer items than requested
    #[error("Cannot remove {requested} items from a pile of {available}")]
    NotEnoughItems {
        #[allow(missing_docs)]
        requested: u32,
        #[allow(missing_docs)]
        available: u32,
    },

    /// Pile index is out of range
    #[error("There is no pile {index}, the board has {pile_count} piles")]
    NoSuchPile {
        #[allow(missing_docs)]
        index: usize,
        #[allow(missing_docs)]
        pile_count: usize,
    },

    /// Somebody else is to move
    #[error("It is {expected}'s turn")]
    NotYourTurn {
        /// Player that is allowed to act
        expected: Player,
    },

    /// Last item has already been taken
    #[error("The game is over")]
    GameOver,
}

/// Heap of countable items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pile {
    id: usize,
    count: u32,
}

impl Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count)
    }
}

impl Pile {
    /// Create new pile with `count` items
    #[inline]
    pub const fn new(id: usize, count: u32) -> Self {
        Self { id, count }
    }

    /// Identifier of the pile, its index on the board at creation
    #[inline]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Number of items left in the pile
    #[inline]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Value of the pile as a single Nim heap
    #[inline]
    pub const fn nimber(&self) -> Nimber {
        Nimber::new(self.count)
    }

    /// Check if no items are left
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Take `amount` items from the pile. On error the pile is left untouched.
    ///
    /// # Errors
    /// - [`MoveError::ZeroAmount`] when `amount` is zero
    /// - [`MoveError::NotEnoughItems`] when `amount` exceeds the pile
    pub fn remove_items(&mut self, amount: u32) -> Result<(), MoveError> {
        if amount == 0 {
            log::warn!("Pile {}: refusing to remove zero items", self.id);
            return Err(MoveError::ZeroAmount);
        }

        if amount > self.count {
            log::warn!(
                "Pile {}: cannot remove {} items, only {} left",
                self.id,
                amount,
                self.count
            );
            return Err(MoveError::NotEnoughItems {
                requested: amount,
                available: self.count,
            });
        }

        self.count -= amount;
        Ok(())
    }

    /// Overwrite number of items. Meant for setting up a game, not for playing it.
    #[inline]
    pub const fn reset(&mut self, count: u32) {
        self.count = count;
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Pile {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;
        Pile::new(usize::arbitrary(g) % 16, u32::arbitrary(g) % 64)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let id = self.id;
        Box::new(quickcheck::Arbitrary::shrink(&self.count).map(move |count| Pile::new(id, count)))
    }
}
