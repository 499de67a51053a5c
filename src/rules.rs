//! Move validation.
//!
//! A candidate placement is played out on a scratch copy of the board:
//! place the stone, remove every adjacent opponent group left without
//! liberties, then judge suicide and ko on the result. The caller's board is
//! never touched, so a rejected move leaves no trace.

use log::debug;

use crate::board::{Board, Color, Point, Stone, str_coord};
use crate::error::MoveError;
use crate::group::{get_group, liberties};
use crate::ko::KoGuard;

/// An accepted placement, ready to be applied by [`crate::capture::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub point: Point,
    pub color: Color,
    /// Opponent stones removed by the move, sorted row-major
    pub captures: Vec<Point>,
    /// Point the opponent may not play next, if the move made a ko
    pub ko_point: Option<Point>,
}

/// Decide whether `player` may play at `pt`.
///
/// Checks, in order: bounds, occupancy, captures (simulated), suicide, ko.
///
/// # Errors
/// - `OutOfBounds` - `pt` is not on the board
/// - `Occupied` - `pt` already holds a stone
/// - `Suicide` - the new stone's group has no liberties after captures
/// - `KoViolation` - the move retakes a single-stone ko
pub fn validate(
    board: &Board,
    ko: &KoGuard,
    pt: Point,
    player: Color,
) -> Result<Accepted, MoveError> {
    match board.get(pt) {
        None => return Err(MoveError::OutOfBounds),
        Some(Stone::Empty) => {}
        Some(_) => return Err(MoveError::Occupied),
    }

    let mut scratch = board.clone();
    scratch.set(pt, Stone::from(player));

    let captures = find_captures(&scratch, pt, player);
    for &c in &captures {
        scratch.set(c, Stone::Empty);
    }

    let own_group = get_group(pt, &scratch);
    let own_libs = liberties(&own_group, &scratch);
    if own_libs.is_empty() {
        return Err(MoveError::Suicide);
    }

    if ko.forbids(pt, &scratch) {
        debug!("ko violation at {}", str_coord(pt, board.size()));
        return Err(MoveError::KoViolation);
    }

    let ko_point = if captures.len() == 1 && own_group.len() == 1 && own_libs.len() == 1 {
        Some(own_libs[0])
    } else {
        None
    };

    Ok(Accepted {
        point: pt,
        color: player,
        captures,
        ko_point,
    })
}

/// Opponent stones adjacent to `pt` whose groups have no liberties on
/// `board`, where `board` already holds the new stone at `pt`.
fn find_captures(board: &Board, pt: Point, player: Color) -> Vec<Point> {
    let opponent = Stone::from(player.opponent());
    let mut captures: Vec<Point> = Vec::new();

    for n in board.neighbors(pt) {
        // Two neighbors may belong to the same group.
        if board[n] != opponent || captures.contains(&n) {
            continue;
        }
        let group = get_group(n, board);
        if liberties(&group, board).is_empty() {
            captures.extend(group);
        }
    }

    captures.sort_unstable();
    captures
}

/// Every empty point where `player` may legally play, row-major.
pub fn legal_moves(board: &Board, ko: &KoGuard, player: Color) -> Vec<Point> {
    board
        .points()
        .filter(|&pt| validate(board, ko, pt, player).is_ok())
        .collect()
}
