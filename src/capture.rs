//! Applying an accepted placement to the authoritative board.

use log::debug;

use crate::board::{Board, Color, Stone, str_coord};
use crate::rules::Accepted;

/// Stones each player has captured so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureCounts {
    pub black: u32,
    pub white: u32,
}

impl CaptureCounts {
    /// Captures made by `color`.
    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn add(&mut self, color: Color, n: u32) {
        match color {
            Color::Black => self.black += n,
            Color::White => self.white += n,
        }
    }
}

/// Play `mv` on `board` and credit its captures to the mover.
///
/// Uses the capture set computed during validation; nothing is re-derived
/// here, so the board always ends up exactly as validation predicted.
/// Returns the number of stones removed.
pub fn apply(board: &mut Board, mv: &Accepted, counts: &mut CaptureCounts) -> u32 {
    board.set(mv.point, Stone::from(mv.color));
    for &pt in &mv.captures {
        board.set(pt, Stone::Empty);
    }

    let n = mv.captures.len() as u32;
    if n > 0 {
        debug!(
            "{} at {} captures {n} stone(s)",
            mv.color,
            str_coord(mv.point, board.size())
        );
        counts.add(mv.color, n);
    }
    n
}
