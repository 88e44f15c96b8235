// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filler Core - Game Rules and Board Logic
//!
//! This crate provides the core engine for a two-player territory-capture
//! ("Filler") game:
//! - Board representation with per-cell color and ownership
//! - The flood-fill capture move
//! - Turn coordination and legal-color computation
//! - Greedy CPU move selection
//! - Win/draw determination
//!
//! Rendering, input handling and windowing are a separate presentation
//! layer; this crate only exposes the state they draw from.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod advisor;
pub mod board;
pub mod capture;
pub mod game;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A side in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, anchored at the top-left corner (moves first)
    One,
    /// Second player, anchored at the bottom-right corner
    Two,
}

impl Player {
    /// Returns the other side
    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A color, identified by its palette index
///
/// Indices `0..palette_len` form the playable palette. The two indices just
/// past it are reserved for the anchor start colors (conventionally white
/// for [`Player::One`] and black for [`Player::Two`]), so at setup neither
/// anchor can accidentally match a randomly colored neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

/// Board coordinate representing a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.x < board_size && self.y < board_size
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The color is not in the playable palette
    #[error("Color not in palette")]
    InvalidColor,

    /// The coordinate is outside the board
    #[error("Coordinate outside the board")]
    OutOfBounds,

    /// The acting side is not the side to move
    #[error("Not this player's turn")]
    NotYourTurn,

    /// The game has already finished
    #[error("Game already finished")]
    GameOver,
}

pub use board::{Board, Cell};
pub use game::{Game, Outcome};
