// SPDX-License-Identifier: MIT OR Apache-2.0

//! Greedy CPU move selection
//!
//! Each candidate color is simulated against a throwaway clone of the
//! board, never against the live one; the caller commits the returned
//! choice through [`crate::game::Game::play`].

use crate::{capture, game::Game, Color, Player};

/// Pick the color with the largest territory gain for `player`.
///
/// Candidates are tried in fixed palette order and compared non-strictly,
/// so among equal gains the color tried last wins. Returns `None` when
/// the side has no legal color.
pub fn choose_move(game: &Game, player: Player) -> Option<Color> {
    let current = game.score(player);
    let mut best: Option<(usize, Color)> = None;

    for color in game.legal_colors(player) {
        let mut scratch = game.board().clone();
        // Legal colors are always playable, so the simulation cannot fail.
        let size = match capture::apply_move(&mut scratch, player, color) {
            Ok(size) => size,
            Err(_) => continue,
        };
        let gained = size - current;
        tracing::debug!("{:?} gains {} by picking color {}", player, gained, color.0);

        match best {
            Some((max, _)) if gained < max => {}
            _ => best = Some((gained, color)),
        }
    }

    let choice = best.map(|(_, color)| color);
    if let Some(color) = choice {
        tracing::debug!("{:?} chooses color {}", player, color.0);
    }
    choice
}
