// SPDX-License-Identifier: MIT OR Apache-2.0

//! The flood-fill capture move, the only board mutation during play

use crate::{board::Board, Color, GameError, Player};

/// Apply a color choice for `player`: recolor their whole territory to
/// `color`, then absorb every unowned cell of that color transitively
/// reachable from it. Returns the player's new territory size.
///
/// This is a pure board primitive: it does not know or care whose turn it
/// is, which lets the CPU advisor run it against throwaway board clones.
/// An off-palette color fails with [`GameError::InvalidColor`] and leaves
/// the board untouched.
pub fn apply_move(board: &mut Board, player: Player, color: Color) -> Result<usize, GameError> {
    if !board.is_playable(color) {
        return Err(GameError::InvalidColor);
    }

    // Frontier seeded with the current territory. It keeps growing while
    // it is consumed, so newly absorbed cells get their neighbors checked
    // too. Claiming doubles as the visited marker: a cell is claimed at
    // most once, which bounds the loop at N² iterations.
    let mut frontier = board.owned_by(player);
    let mut cursor = 0;

    while cursor < frontier.len() {
        let coord = frontier[cursor];
        cursor += 1;

        board.paint(coord, color);

        for neighbor in board.neighbors(coord) {
            let absorb = match board.cell(neighbor) {
                Some(cell) => cell.owner.is_none() && cell.color == color,
                None => false,
            };
            if absorb {
                board.claim(neighbor, player);
                frontier.push(neighbor);
            }
        }
    }

    tracing::debug!(
        "{:?} picked color {} and now owns {} cells",
        player,
        color.0,
        frontier.len()
    );

    Ok(frontier.len())
}
