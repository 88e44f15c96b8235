// SPDX-License-Identifier: MIT OR Apache-2.0

use filler_core::{board::Board, capture, Color, Coord, GameError, Player};

/// 3×3 fixture, palette of 3. Row-major layout before anchoring:
/// ```text
/// 0 1 2
/// 1 1 2
/// 2 2 0
/// ```
/// Anchoring turns (0,0) into color 3 owned by One and (2,2) into color 4
/// owned by Two.
fn three_by_three() -> Board {
    Board::from_colors(3, 3, &[0, 1, 2, 1, 1, 2, 2, 2, 0]).unwrap()
}

#[test]
fn absorbs_transitively_through_matching_cells() {
    let mut board = three_by_three();

    // Color 1 reaches (1,0) and (0,1) directly and (1,1) through them
    let size = capture::apply_move(&mut board, Player::One, Color(1)).unwrap();

    assert_eq!(size, 4);
    assert_eq!(board.count_owned_by(Player::One), 4);
    for coord in [
        Coord::new(0, 0),
        Coord::new(1, 0),
        Coord::new(0, 1),
        Coord::new(1, 1),
    ] {
        let cell = board.cell(coord).unwrap();
        assert_eq!(cell.owner, Some(Player::One));
        assert_eq!(cell.color, Color(1));
    }
    assert_eq!(board.territory_color(Player::One), Color(1));
    // The opponent was never touched
    assert_eq!(board.count_owned_by(Player::Two), 1);
}

#[test]
fn fill_is_maximal() {
    let mut board = three_by_three();
    let chosen = Color(1);
    capture::apply_move(&mut board, Player::One, chosen).unwrap();

    // Closure property: no unowned neighbor of the new territory still
    // carries the chosen color
    for coord in board.owned_by(Player::One) {
        for neighbor in board.neighbors(coord) {
            let cell = board.cell(neighbor).unwrap();
            if cell.owner.is_none() {
                assert_ne!(cell.color, chosen);
            }
        }
    }
}

#[test]
fn own_color_is_a_no_op() {
    let mut board = three_by_three();
    capture::apply_move(&mut board, Player::One, Color(1)).unwrap();
    let snapshot = board.clone();

    // Territory is already color 1; picking it again claims nothing
    let size = capture::apply_move(&mut board, Player::One, Color(1)).unwrap();

    assert_eq!(size, 4);
    assert_eq!(board, snapshot);
}

#[test]
fn invalid_color_leaves_board_unmodified() {
    let mut board = three_by_three();
    let snapshot = board.clone();

    // Reserved anchor colors and out-of-range indices are both rejected
    for bad in [Color(3), Color(4), Color(17)] {
        assert_eq!(
            capture::apply_move(&mut board, Player::One, bad),
            Err(GameError::InvalidColor)
        );
        assert_eq!(board, snapshot);
    }
}

#[test]
fn two_by_two_scenario() {
    // Layout Y Y / R R with Y=0, R=1; anchoring overrides the corners so
    // only (1,0)=Y and (0,1)=R stay up for grabs
    let board = Board::from_colors(2, 2, &[0, 0, 1, 1]).unwrap();

    let mut pick_yellow = board.clone();
    let size = capture::apply_move(&mut pick_yellow, Player::One, Color(0)).unwrap();
    assert_eq!(size, 2);
    assert_eq!(
        pick_yellow.cell(Coord::new(1, 0)).unwrap().owner,
        Some(Player::One)
    );
    assert_eq!(pick_yellow.cell(Coord::new(0, 1)).unwrap().owner, None);

    let mut pick_red = board.clone();
    let size = capture::apply_move(&mut pick_red, Player::One, Color(1)).unwrap();
    assert_eq!(size, 2);
    assert_eq!(
        pick_red.cell(Coord::new(0, 1)).unwrap().owner,
        Some(Player::One)
    );
    assert_eq!(pick_red.cell(Coord::new(1, 0)).unwrap().owner, None);
}

#[test]
fn absorption_reads_premove_colors() {
    // A neighbor is absorbed on its original color, not on anything this
    // move painted. One's territory is recolored to 0 here; the cell at
    // (2,0) already was 0 but is only reachable through (1,0), which is
    // color 1 and must block the fill.
    let mut board = Board::from_colors(3, 3, &[0, 1, 0, 2, 2, 2, 2, 2, 0]).unwrap();
    let size = capture::apply_move(&mut board, Player::One, Color(0)).unwrap();

    assert_eq!(size, 1);
    assert_eq!(board.cell(Coord::new(2, 0)).unwrap().owner, None);
    assert_eq!(board.cell(Coord::new(1, 0)).unwrap().owner, None);
}
