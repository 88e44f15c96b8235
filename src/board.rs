// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Color, Coord, GameError, Player};

/// A single grid cell: its current color plus an optional owner.
///
/// Cell identity is positional; the cell at a coordinate is mutated in
/// place for the lifetime of the board, never replaced or moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Current color of the cell
    pub color: Color,
    /// Which side owns the cell, if any
    pub owner: Option<Player>,
}

/// The game board: an N×N grid of colored, optionally owned cells.
///
/// Ownership is monotonic: a cell goes from unowned to owned by one side
/// exactly once and never changes hands afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Size of the board (the original game uses 32)
    size: u8,
    /// Number of playable palette colors
    palette_len: u8,
    /// Row-major cell storage, indexed `y * size + x`
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new randomized board using the thread-local RNG.
    ///
    /// Panics if `size` is below 2 or the palette is empty.
    pub fn new(size: u8, palette_len: u8) -> Self {
        Self::new_random(size, palette_len, &mut rand::thread_rng())
    }

    /// Create a new board with cell colors drawn uniformly and
    /// independently from the supplied RNG, then claim the two anchors.
    ///
    /// Panics if `size` is below 2 or the palette is empty: the two
    /// anchors need distinct corner cells.
    pub fn new_random<R: Rng>(size: u8, palette_len: u8, rng: &mut R) -> Self {
        assert!(size >= 2, "board needs two distinct anchor corners");
        assert!(palette_len >= 1, "palette cannot be empty");
        let count = (size as usize) * (size as usize);
        let mut board = Self {
            size,
            palette_len,
            cells: (0..count)
                .map(|_| Cell {
                    color: Color(rng.gen_range(0..palette_len)),
                    owner: None,
                })
                .collect(),
        };
        board.claim_anchors();
        board
    }

    /// Build a board from an explicit row-major color layout.
    ///
    /// The anchors are claimed and recolored exactly as in random setup,
    /// overriding whatever the layout put at the two corners. Fails with
    /// [`GameError::OutOfBounds`] if the grid is too small for two distinct
    /// anchors or the layout does not fit an N×N grid, and
    /// [`GameError::InvalidColor`] if any entry is outside the palette.
    pub fn from_colors(size: u8, palette_len: u8, colors: &[u8]) -> Result<Self, GameError> {
        if size < 2 || colors.len() != (size as usize) * (size as usize) {
            return Err(GameError::OutOfBounds);
        }
        if colors.iter().any(|&c| c >= palette_len) {
            return Err(GameError::InvalidColor);
        }
        let mut board = Self {
            size,
            palette_len,
            cells: colors
                .iter()
                .map(|&c| Cell {
                    color: Color(c),
                    owner: None,
                })
                .collect(),
        };
        board.claim_anchors();
        Ok(board)
    }

    /// Give each player their corner cell, recolored to its reserved
    /// start color so it cannot match any randomly colored neighbor.
    fn claim_anchors(&mut self) {
        let one = self.index(self.anchor(Player::One));
        self.cells[one] = Cell {
            color: Color(self.palette_len),
            owner: Some(Player::One),
        };
        let two = self.index(self.anchor(Player::Two));
        self.cells[two] = Cell {
            color: Color(self.palette_len + 1),
            owner: Some(Player::Two),
        };
    }

    /// Get the cell at the specified coordinate, if it is on the board
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if !coord.is_valid(self.size) {
            return None;
        }
        Some(&self.cells[self.index(coord)])
    }

    /// Recolor a single cell; ownership is untouched.
    ///
    /// Accepts any playable or reserved anchor color. Intended for fixture
    /// setup; during play only [`crate::capture::apply_move`] recolors.
    pub fn set_color(&mut self, coord: Coord, color: Color) -> Result<(), GameError> {
        if !coord.is_valid(self.size) {
            return Err(GameError::OutOfBounds);
        }
        if color.0 >= self.palette_len + 2 {
            return Err(GameError::InvalidColor);
        }
        let idx = self.index(coord);
        self.cells[idx].color = color;
        Ok(())
    }

    /// Convert a coordinate to a vector index
    fn index(&self, coord: Coord) -> usize {
        (coord.y as usize) * (self.size as usize) + (coord.x as usize)
    }

    /// Get adjacent in-bounds coordinates, always in the order
    /// left, right, up, down
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        let mut result = Vec::with_capacity(4);
        let Coord { x, y } = coord;

        if x > 0 {
            result.push(Coord::new(x - 1, y));
        }
        if x < self.size - 1 {
            result.push(Coord::new(x + 1, y));
        }
        if y > 0 {
            result.push(Coord::new(x, y - 1));
        }
        if y < self.size - 1 {
            result.push(Coord::new(x, y + 1));
        }

        result
    }

    /// All cells with their coordinates, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        let size = self.size as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new((i % size) as u8, (i / size) as u8), cell))
    }

    /// Coordinates of every cell the given side owns, in row-major order
    pub fn owned_by(&self, player: Player) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.owner == Some(player))
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells the given side owns (the player's score)
    pub fn count_owned_by(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner == Some(player))
            .count()
    }

    /// The fixed starting cell of the given side
    pub fn anchor(&self, player: Player) -> Coord {
        match player {
            Player::One => Coord::new(0, 0),
            Player::Two => Coord::new(self.size - 1, self.size - 1),
        }
    }

    /// Current color of the side's territory.
    ///
    /// Reading the anchor suffices: a move recolors the whole territory at
    /// once, so every owned cell shares the anchor's color.
    pub fn territory_color(&self, player: Player) -> Color {
        self.cells[self.index(self.anchor(player))].color
    }

    /// True once every cell is owned
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.owner.is_some())
    }

    /// True if the color is in the playable palette
    pub fn is_playable(&self, color: Color) -> bool {
        color.0 < self.palette_len
    }

    /// Get the size of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of playable palette colors
    pub fn palette_len(&self) -> u8 {
        self.palette_len
    }

    /// The playable palette, in fixed iteration order
    pub fn palette(&self) -> impl Iterator<Item = Color> {
        (0..self.palette_len).map(Color)
    }

    pub(crate) fn paint(&mut self, coord: Coord, color: Color) {
        let idx = self.index(coord);
        self.cells[idx].color = color;
    }

    pub(crate) fn claim(&mut self, coord: Coord, player: Player) {
        let idx = self.index(coord);
        debug_assert!(self.cells[idx].owner.is_none());
        self.cells[idx].owner = Some(player);
    }
}
