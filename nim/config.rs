//! Starting setup of a game

use crate::{display, parsing::Parser, player::Player};
use rand::Rng;
use std::fmt::Display;
use thiserror::Error;

/// Reason why a setup was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Board without piles
    #[error("At least one pile is required")]
    NoPiles,

    /// Pile that starts empty
    #[error("Pile {} must hold at least one item", .index + 1)]
    EmptyPile {
        /// Zero-based index of the offending pile
        index: usize,
    },

    /// Input is not a comma separated list of numbers
    #[error("Could not parse pile sizes from '{input}', expected e.g. '3, 4, 5'")]
    Malformed {
        #[allow(missing_docs)]
        input: String,
    },
}

/// Pile sizes and the player that moves first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pile_sizes: Vec<u32>,
    starting_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pile_sizes: vec![3, 4, 5],
            starting_player: Player::Human,
        }
    }
}

impl Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display::brackets(f, |f| display::commas(f, &self.pile_sizes))?;
        write!(f, ", {} starts", self.starting_player)
    }
}

impl GameConfig {
    /// Validate and construct a new setup
    ///
    /// # Errors
    /// - [`ConfigError::NoPiles`] when `pile_sizes` is empty
    /// - [`ConfigError::EmptyPile`] when any of the sizes is zero
    pub fn new(pile_sizes: Vec<u32>, starting_player: Player) -> Result<Self, ConfigError> {
        if pile_sizes.is_empty() {
            return Err(ConfigError::NoPiles);
        }

        if let Some(index) = pile_sizes.iter().position(|&size| size == 0) {
            return Err(ConfigError::EmptyPile { index });
        }

        Ok(Self {
            pile_sizes,
            starting_player,
        })
    }

    /// Construct setup without validating pile sizes. Engine tolerates empty piles, so this is
    /// useful for setting up endgames.
    #[inline]
    pub const fn new_unchecked(pile_sizes: Vec<u32>, starting_player: Player) -> Self {
        Self {
            pile_sizes,
            starting_player,
        }
    }

    /// Parse comma separated pile sizes, e.g. `"3, 4, 5"`
    ///
    /// # Errors
    /// Same as [`GameConfig::new`], or [`ConfigError::Malformed`] if input is not a list of
    /// unsigned numbers
    pub fn parse(input: &str, starting_player: Player) -> Result<Self, ConfigError> {
        Self::new(parse_pile_sizes(input)?, starting_player)
    }

    /// Draw `pile_count` piles with sizes from `1..=max_size`
    ///
    /// # Errors
    /// [`ConfigError::NoPiles`] when `pile_count` is zero,
    /// [`ConfigError::EmptyPile`] when `max_size` is zero
    pub fn random<R>(
        rng: &mut R,
        pile_count: usize,
        max_size: u32,
        starting_player: Player,
    ) -> Result<Self, ConfigError>
    where
        R: Rng,
    {
        if max_size == 0 && pile_count > 0 {
            return Err(ConfigError::EmptyPile { index: 0 });
        }

        let pile_sizes = (0..pile_count)
            .map(|_| rng.random_range(1..=max_size))
            .collect();
        Self::new(pile_sizes, starting_player)
    }

    /// Initial pile sizes
    #[inline]
    pub fn pile_sizes(&self) -> &[u32] {
        &self.pile_sizes
    }

    /// Player that makes the first move
    #[inline]
    pub const fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Replace the pile sizes, keeping the starting player
    #[inline]
    pub fn set_pile_sizes(&mut self, pile_sizes: Vec<u32>) {
        self.pile_sizes = pile_sizes;
    }

    /// Replace the starting player
    #[inline]
    pub const fn set_starting_player(&mut self, starting_player: Player) {
        self.starting_player = starting_player;
    }
}

/// Parse comma separated pile sizes, without checking that they are positive
///
/// # Errors
/// [`ConfigError::Malformed`] if input is not a list of unsigned numbers
pub fn parse_pile_sizes(input: &str) -> Result<Vec<u32>, ConfigError> {
    match Parser::new(input).parse_u32_list() {
        Some((p, sizes)) if p.is_empty() => Ok(sizes),
        _ => Err(ConfigError::Malformed {
            input: input.to_owned(),
        }),
    }
}
