// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session state: turn coordination and outcome evaluation

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{advisor, board::Board, capture, Color, GameError, Player};

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One side owns strictly more cells than the other
    Winner(Player),
    /// Both sides own exactly half the board
    Draw,
}

/// One game session: a board, the side to move, and the cached outcome.
///
/// Each session owns its board outright; a new game means a new `Game`.
/// [`Player::One`] always moves first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a new game on a randomized board
    pub fn new(size: u8, palette_len: u8) -> Self {
        Self::from_board(Board::new(size, palette_len))
    }

    /// Start a new game with board colors drawn from the supplied RNG
    pub fn with_rng<R: Rng>(size: u8, palette_len: u8, rng: &mut R) -> Self {
        Self::from_board(Board::new_random(size, palette_len, rng))
    }

    /// Wrap an existing board in a fresh session
    pub fn from_board(board: Board) -> Self {
        let mut game = Self {
            board,
            to_move: Player::One,
            outcome: None,
        };
        game.outcome = game.evaluate();
        game
    }

    /// The board, for rendering and inspection
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side entitled to move
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of cells the side owns. Always derived from the board,
    /// never stored.
    pub fn score(&self, player: Player) -> usize {
        self.board.count_owned_by(player)
    }

    /// Colors the given side may pick this turn.
    ///
    /// A color is excluded when it equals either side's current territory
    /// color: the player's own color would be a no-op, and the opponent's
    /// would be indistinguishable on the board. The presentation layer
    /// uses this to enable and disable its color controls.
    pub fn legal_colors(&self, player: Player) -> Vec<Color> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        let own = self.board.territory_color(player);
        let theirs = self.board.territory_color(player.opponent());
        self.board
            .palette()
            .filter(|&color| color != own && color != theirs)
            .collect()
    }

    /// Apply a color choice for the side to move.
    ///
    /// Rejects moves once the game is over and moves out of turn; color
    /// validation is the capture engine's. On success the outcome is
    /// re-evaluated and the turn passes to the other side. Returns the
    /// mover's new score.
    pub fn play(&mut self, player: Player, color: Color) -> Result<usize, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if player != self.to_move {
            return Err(GameError::NotYourTurn);
        }

        let score = capture::apply_move(&mut self.board, player, color)?;

        self.outcome = self.evaluate();
        if let Some(outcome) = self.outcome {
            tracing::debug!("game finished: {:?}", outcome);
        }
        self.to_move = self.to_move.opponent();

        Ok(score)
    }

    /// Give up the turn without touching the board.
    ///
    /// This is the escape hatch for the rare deadlock where every palette
    /// color equals one of the two territory colors and the side to move
    /// has no legal choice.
    pub fn pass(&mut self, player: Player) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if player != self.to_move {
            return Err(GameError::NotYourTurn);
        }
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Let the greedy advisor take this turn; passes when it has no
    /// legal color. Returns the side's score after the turn.
    pub fn play_cpu(&mut self, player: Player) -> Result<usize, GameError> {
        match advisor::choose_move(self, player) {
            Some(color) => self.play(player, color),
            None => {
                self.pass(player)?;
                Ok(self.score(player))
            }
        }
    }

    /// True once every cell is owned. Full coverage is the only end
    /// condition; there is no turn limit or resignation.
    pub fn is_finished(&self) -> bool {
        self.board.is_full()
    }

    /// Final outcome, or `None` while cells remain unowned
    pub fn winner(&self) -> Option<Outcome> {
        self.outcome
    }

    fn evaluate(&self) -> Option<Outcome> {
        if !self.board.is_full() {
            return None;
        }
        let one = self.board.count_owned_by(Player::One);
        let two = self.board.count_owned_by(Player::Two);
        Some(match one.cmp(&two) {
            Ordering::Greater => Outcome::Winner(Player::One),
            Ordering::Less => Outcome::Winner(Player::Two),
            Ordering::Equal => Outcome::Draw,
        })
    }
}
