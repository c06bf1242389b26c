use anyhow::{Context, Result};
use clap::{self, Parser};
use nim::{GameConfig, Player};

/// Board setup shared by all commands
#[derive(Parser, Debug, Clone)]
pub struct BoardArgs {
    /// Comma separated list of pile sizes
    #[arg(long, default_value = "3,4,5")]
    pub piles: String,

    /// Player that moves first: human or computer
    #[arg(long, default_value_t = Player::Human)]
    pub first: Player,

    /// Ignore --piles and draw that many piles at random
    #[arg(long)]
    pub random: Option<usize>,

    /// Largest pile size when drawing piles at random
    #[arg(long, default_value_t = 7)]
    pub max_size: u32,
}

impl BoardArgs {
    pub fn config(&self) -> Result<GameConfig> {
        let config = match self.random {
            Some(pile_count) => {
                GameConfig::random(&mut rand::rng(), pile_count, self.max_size, self.first)
                    .context("Could not draw random piles")
            }
            None => GameConfig::parse(&self.piles, self.first).context("Invalid --piles"),
        }?;
        log::debug!("Playing on {}", config);
        Ok(config)
    }
}
