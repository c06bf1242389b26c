//! Players of the game

use std::{fmt::Display, str::FromStr};

/// One of the two sides of a game. Both have exactly the same moves, the only difference is who
/// is allowed to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Opposite player
    #[inline(always)]
    #[must_use]
    pub const fn opposite(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

impl FromStr for Player {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "h" => Ok(Player::Human),
            "computer" | "c" | "ai" => Ok(Player::Computer),
            _ => Err("Player must be either 'human' or 'computer'"),
        }
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if <bool as quickcheck::Arbitrary>::arbitrary(g) {
            Player::Human
        } else {
            Player::Computer
        }
    }
}
