//! Game of Nim between a human and a perfect computer opponent.
//!
//! Players alternate removing any positive number of items from a single pile. Whoever takes the
//! last item wins (normal-play convention).
//!
//! The engine is a synchronous state machine with three states, see [`GameState`]. Every
//! command either succeeds and advances the machine, or fails without touching anything.

use crate::{
    config::GameConfig,
    display,
    impartial::NimPosition,
    numeric::nimber::Nimber,
    pile::{MoveError, Pile},
    player::Player,
    strategy::{self, Move},
};
use itertools::Itertools;
use std::fmt::Display;

/// Whose turn it is, or whether the game has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum GameState {
    HumanTurn,
    ComputerTurn,
    Over,
}

/// Game coordinator owning the board
#[derive(Debug, Clone)]
pub struct GameEngine {
    piles: Vec<Pile>,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    initial_config: GameConfig,
}

impl Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display::pile_rows(f, &self.counts(), 'o')
    }
}

impl GameEngine {
    /// Start a new game. Pile sizes are expected to be validated by the caller, see
    /// [`GameConfig::new`].
    pub fn new(pile_sizes: Vec<u32>, starting_player: Player) -> Self {
        Self::from_config(GameConfig::new_unchecked(pile_sizes, starting_player))
    }

    /// Start a new game from a setup
    pub fn from_config(initial_config: GameConfig) -> Self {
        let mut engine = Self {
            piles: Vec::new(),
            current_player: initial_config.starting_player(),
            game_over: false,
            winner: None,
            initial_config,
        };
        engine.rebuild();
        engine
    }

    /// Piles on the board, in order
    #[inline]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Sizes of the piles, in order
    pub fn counts(&self) -> Vec<u32> {
        self.piles.iter().map(Pile::count).collect()
    }

    /// Player allowed to move. After the game ends this is the player who took the last item.
    #[inline]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check if all items have been taken
    #[inline]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Player who took the last item, `None` while the game is running
    #[inline]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Setup used by [`GameEngine::reset`] when called without arguments
    #[inline]
    pub const fn initial_config(&self) -> &GameConfig {
        &self.initial_config
    }

    /// Current state of the turn machine
    pub const fn state(&self) -> GameState {
        if self.game_over {
            GameState::Over
        } else {
            match self.current_player {
                Player::Human => GameState::HumanTurn,
                Player::Computer => GameState::ComputerTurn,
            }
        }
    }

    /// Nim-sum of the board
    pub fn nim_sum(&self) -> Nimber {
        self.piles.iter().map(Pile::nimber).sum()
    }

    /// Number of items left on the board
    pub fn total_items(&self) -> u64 {
        self.piles.iter().map(|pile| u64::from(pile.count())).sum()
    }

    /// Check if the player to move wins with perfect play
    pub fn is_winning_position(&self) -> bool {
        !self.nim_sum().is_zero()
    }

    /// Snapshot of the board, detached from the game
    pub fn position(&self) -> NimPosition {
        NimPosition::from_piles(&self.piles)
    }

    /// Take `amount` items from the pile at `pile_index` on behalf of the human player.
    ///
    /// # Errors
    /// When it is not human's turn, the game is over, the pile does not exist or `amount` is not
    /// in `1..=count`. The game is left unchanged.
    pub fn user_move(&mut self, pile_index: usize, amount: u32) -> Result<(), MoveError> {
        self.apply_move(Player::Human, Move::new(pile_index, amount))
    }

    /// Perfect move for the player to move, see [`strategy::best_move`].
    /// `None` if there is nothing left to take.
    pub fn calculate_best_move(&self) -> Option<Move> {
        strategy::best_move(&self.counts())
    }

    /// Make the computer's move. Returns the move that was applied, or `None` if it is not
    /// computer's turn or the game is over.
    pub fn make_ai_move(&mut self) -> Option<Move> {
        if self.game_over || self.current_player != Player::Computer {
            log::warn!(
                "Computer cannot move now (game over: {}, to move: {})",
                self.game_over,
                self.current_player
            );
            return None;
        }

        let Some(m) = self.calculate_best_move() else {
            log::warn!("Computer found nothing to take");
            return None;
        };
        log::debug!(
            "Computer at nim-sum {} plays {} on [{}]",
            self.nim_sum(),
            m,
            self.piles.iter().join(", ")
        );

        match self.apply_move(Player::Computer, m) {
            Ok(()) => Some(m),
            Err(err) => {
                log::warn!("Computer move {} rejected: {}", m, err);
                None
            }
        }
    }

    /// Mark the game as finished if the board is empty. The winner is the player who moved last,
    /// and is recorded only once.
    pub fn check_game_over(&mut self) -> bool {
        if !self.game_over && self.total_items() == 0 {
            self.game_over = true;
            self.winner = Some(self.current_player);
            log::debug!("Game over, {} wins", self.current_player);
        }
        self.game_over
    }

    /// Start over. Omitted arguments are taken from the stored setup, given ones replace it for
    /// future resets.
    pub fn reset(&mut self, pile_sizes: Option<Vec<u32>>, starting_player: Option<Player>) {
        if let Some(pile_sizes) = pile_sizes {
            self.initial_config.set_pile_sizes(pile_sizes);
        }
        if let Some(starting_player) = starting_player {
            self.initial_config.set_starting_player(starting_player);
        }
        self.rebuild();
        log::debug!("Game reset to {}", self.initial_config);
    }

    fn rebuild(&mut self) {
        self.piles = self
            .initial_config
            .pile_sizes()
            .iter()
            .enumerate()
            .map(|(id, &count)| Pile::new(id, count))
            .collect();
        self.current_player = self.initial_config.starting_player();
        self.winner = None;
        // Nobody has moved yet, so an empty board is over without a winner
        self.game_over = self.total_items() == 0;
    }

    fn apply_move(&mut self, player: Player, m: Move) -> Result<(), MoveError> {
        if self.game_over {
            log::warn!("{} tried to move after the game ended", player);
            return Err(MoveError::GameOver);
        }

        if self.current_player != player {
            log::warn!("{} tried to move out of turn", player);
            return Err(MoveError::NotYourTurn {
                expected: self.current_player,
            });
        }

        let pile_count = self.piles.len();
        let Some(pile) = self.piles.get_mut(m.pile_index) else {
            log::warn!("{} picked pile {} out of {}", player, m.pile_index, pile_count);
            return Err(MoveError::NoSuchPile {
                index: m.pile_index,
                pile_count,
            });
        };
        pile.remove_items(m.amount)?;
        log::debug!("{} took {} from pile {}", player, m.amount, m.pile_index);

        if !self.check_game_over() {
            self.current_player = self.current_player.opposite();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impartial::ImpartialGame;
    use quickcheck::{Arbitrary, Gen, QuickCheck};

    #[derive(Debug, Clone)]
    struct Setup {
        pile_sizes: Vec<u32>,
        starting_player: Player,
    }

    impl Arbitrary for Setup {
        fn arbitrary(g: &mut Gen) -> Self {
            let pile_count = usize::arbitrary(g) % 5 + 1;
            let pile_sizes = (0..pile_count).map(|_| u32::arbitrary(g) % 9 + 1).collect();
            Setup {
                pile_sizes,
                starting_player: Player::arbitrary(g),
            }
        }
    }

    fn snapshot(engine: &GameEngine) -> (Vec<u32>, Player, bool, Option<Player>) {
        (
            engine.counts(),
            engine.current_player(),
            engine.is_game_over(),
            engine.winner(),
        )
    }

    #[test]
    fn best_move_on_reference_board() {
        let mut engine = GameEngine::new(vec![3, 4, 5], Player::Computer);
        assert_eq!(engine.nim_sum(), Nimber::new(2));
        assert_eq!(engine.calculate_best_move(), Some(Move::new(0, 2)));

        assert_eq!(engine.make_ai_move(), Some(Move::new(0, 2)));
        assert_eq!(engine.counts(), vec![1, 4, 5]);
        assert!(engine.nim_sum().is_zero());
        assert_eq!(engine.state(), GameState::HumanTurn);
    }

    #[test]
    fn losing_computer_takes_one() {
        let mut engine = GameEngine::new(vec![1, 1], Player::Computer);
        assert!(!engine.is_winning_position());
        assert_eq!(engine.make_ai_move(), Some(Move::new(0, 1)));
        assert_eq!(engine.counts(), vec![0, 1]);
        assert_eq!(engine.current_player(), Player::Human);
    }

    #[test]
    fn human_takes_last_item() {
        let mut engine = GameEngine::new(vec![0, 0, 5], Player::Human);
        assert_eq!(engine.user_move(2, 5), Ok(()));
        assert!(engine.is_game_over());
        assert_eq!(engine.winner(), Some(Player::Human));
        assert_eq!(engine.state(), GameState::Over);

        assert_eq!(engine.user_move(2, 1), Err(MoveError::GameOver));
        assert_eq!(engine.make_ai_move(), None);
        assert_eq!(engine.winner(), Some(Player::Human));

        assert!(engine.check_game_over());
        assert_eq!(engine.winner(), Some(Player::Human));
        assert_eq!(engine.current_player(), Player::Human);
    }

    #[test]
    fn computer_takes_last_item() {
        let mut engine = GameEngine::new(vec![0, 4], Player::Computer);
        assert_eq!(engine.make_ai_move(), Some(Move::new(1, 4)));
        assert!(engine.is_game_over());
        assert_eq!(engine.winner(), Some(Player::Computer));
    }

    #[test]
    fn too_large_amount_is_rejected() {
        let mut engine = GameEngine::new(vec![3, 4, 5], Player::Human);
        assert_eq!(
            engine.user_move(0, 10),
            Err(MoveError::NotEnoughItems {
                requested: 10,
                available: 3
            })
        );
        assert_eq!(engine.counts(), vec![3, 4, 5]);
        assert_eq!(engine.current_player(), Player::Human);
        assert!(!engine.is_game_over());
    }

    #[test]
    fn moves_out_of_turn_are_rejected() {
        let mut engine = GameEngine::new(vec![3, 4, 5], Player::Human);
        assert_eq!(engine.make_ai_move(), None);
        assert_eq!(engine.counts(), vec![3, 4, 5]);

        engine.user_move(1, 1).unwrap();
        assert_eq!(
            engine.user_move(1, 1),
            Err(MoveError::NotYourTurn {
                expected: Player::Computer
            })
        );
        assert_eq!(engine.counts(), vec![3, 3, 5]);
        assert_eq!(
            engine.user_move(7, 1).unwrap_err(),
            MoveError::NotYourTurn {
                expected: Player::Computer
            }
        );
    }

    #[test]
    fn missing_pile_is_rejected() {
        let mut engine = GameEngine::new(vec![3, 4, 5], Player::Human);
        assert_eq!(
            engine.user_move(3, 1),
            Err(MoveError::NoSuchPile {
                index: 3,
                pile_count: 3
            })
        );
        assert_eq!(engine.current_player(), Player::Human);
    }

    #[test]
    fn reset_restores_initial_config() {
        let mut engine = GameEngine::new(vec![3, 4, 5], Player::Human);
        engine.user_move(2, 5).unwrap();
        assert_eq!(engine.make_ai_move(), Some(Move::new(1, 1)));
        engine.user_move(1, 3).unwrap();
        assert_eq!(engine.counts(), vec![3, 0, 0]);

        engine.reset(None, None);
        assert_eq!(engine.counts(), vec![3, 4, 5]);
        assert_eq!(engine.current_player(), Player::Human);
        assert!(!engine.is_game_over());
        assert_eq!(engine.winner(), None);
        assert_eq!(
            engine.piles().iter().map(Pile::id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn reset_with_arguments_replaces_baseline() {
        let mut engine = GameEngine::new(vec![3, 4, 5], Player::Human);
        engine.reset(Some(vec![2, 2]), Some(Player::Computer));
        assert_eq!(engine.counts(), vec![2, 2]);
        assert_eq!(engine.state(), GameState::ComputerTurn);

        engine.make_ai_move().unwrap();
        engine.reset(None, None);
        assert_eq!(engine.counts(), vec![2, 2]);
        assert_eq!(engine.current_player(), Player::Computer);

        engine.reset(None, Some(Player::Human));
        assert_eq!(engine.counts(), vec![2, 2]);
        assert_eq!(engine.initial_config().starting_player(), Player::Human);
    }

    #[test]
    fn empty_board_is_over_without_winner() {
        let mut engine = GameEngine::new(vec![0, 0], Player::Human);
        assert!(engine.is_game_over());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.calculate_best_move(), None);

        assert!(engine.check_game_over());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.state(), GameState::Over);
    }

    #[test]
    fn draws_board() {
        let engine = GameEngine::new(vec![1, 3], Player::Human);
        assert_eq!(engine.to_string(), "1 | o (1)\n2 | o o o (3)\n");
        assert_eq!(engine.position().to_string(), "Nim[1, 3]");
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut qc = QuickCheck::new();
        let test = |setup: Setup, pile_index: usize, amount: u32| {
            let mut engine = GameEngine::new(setup.pile_sizes, setup.starting_player);
            let pile_index = pile_index % (engine.piles().len() + 1);
            if engine.clone().user_move(pile_index, amount).is_ok() {
                return;
            }

            let before = snapshot(&engine);
            for _ in 0..3 {
                assert!(engine.user_move(pile_index, amount).is_err());
                assert_eq!(snapshot(&engine), before);
            }
        };
        qc.quickcheck(test as fn(Setup, usize, u32));
    }

    #[test]
    fn turns_alternate_until_last_item() {
        let mut qc = QuickCheck::new();
        let test = |setup: Setup, choices: Vec<(usize, u32)>| {
            let mut engine = GameEngine::new(setup.pile_sizes, setup.starting_player);
            let mut choices = choices.into_iter().cycle();

            while !engine.is_game_over() {
                let mover = engine.current_player();
                let moved = match mover {
                    Player::Computer => engine.make_ai_move().is_some(),
                    Player::Human => {
                        let (idx, amount) = choices.next().unwrap_or((0, 1));
                        let piles = engine.piles().len();
                        let idx = (idx % piles..piles)
                            .chain(0..piles)
                            .find(|&i| !engine.piles()[i].is_empty())
                            .unwrap();
                        let count = engine.piles()[idx].count();
                        engine.user_move(idx, amount % count + 1).is_ok()
                    }
                };
                assert!(moved);

                if engine.is_game_over() {
                    assert_eq!(engine.total_items(), 0);
                    assert_eq!(engine.winner(), Some(mover));
                    assert_eq!(engine.current_player(), mover);
                } else {
                    assert_ne!(engine.total_items(), 0);
                    assert_eq!(engine.current_player(), mover.opposite());
                    assert_eq!(engine.winner(), None);
                }
            }
        };
        qc.quickcheck(test as fn(Setup, Vec<(usize, u32)>));
    }

    #[test]
    fn computer_wins_from_winning_position() {
        let mut qc = QuickCheck::new();
        let test = |setup: Setup, choices: Vec<(usize, u32)>| {
            let mut engine = GameEngine::new(setup.pile_sizes, Player::Computer);
            if !engine.is_winning_position() {
                return;
            }
            let mut choices = choices.into_iter().cycle();

            while !engine.is_game_over() {
                match engine.current_player() {
                    Player::Computer => {
                        engine.make_ai_move().unwrap();
                        assert!(engine.nim_sum().is_zero());
                    }
                    Player::Human => {
                        let (idx, amount) = choices.next().unwrap_or((0, 1));
                        let piles = engine.piles().len();
                        let idx = (idx % piles..piles)
                            .chain(0..piles)
                            .find(|&i| !engine.piles()[i].is_empty())
                            .unwrap();
                        let count = engine.piles()[idx].count();
                        engine.user_move(idx, amount % count + 1).unwrap();
                    }
                }
            }
            assert_eq!(engine.winner(), Some(Player::Computer));
        };
        qc.quickcheck(test as fn(Setup, Vec<(usize, u32)>));
    }

    #[test]
    fn winning_position_matches_grundy_value() {
        let engine = GameEngine::new(vec![2, 3, 1], Player::Human);
        assert_eq!(engine.position().nim_value(), engine.nim_sum());
        assert!(!engine.is_winning_position());
    }
}
