//! Ko restriction.
//!
//! Two equivalent guards are kept: the forbidden point left by a single-stone
//! capture, and the board as it stood before the last placement. Retaking a
//! single-stone ko trips both. Neither looks further back than one ply, so
//! longer repetition cycles are not detected.

use crate::board::{Board, Point};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KoGuard {
    /// Point the next mover may not play, if the last move made a ko
    forbidden: Option<Point>,
    /// Board immediately before the most recent placement (or at the last pass)
    previous_board: Option<Board>,
}

impl KoGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forbidden_point(&self) -> Option<Point> {
        self.forbidden
    }

    pub fn previous_board(&self) -> Option<&Board> {
        self.previous_board.as_ref()
    }

    /// True if playing at `pt` and reaching `result` would retake a ko.
    pub fn forbids(&self, pt: Point, result: &Board) -> bool {
        if self.forbidden == Some(pt) {
            return true;
        }
        self.previous_board.as_ref() == Some(result)
    }

    /// Guard for the move after a placement made on `before`.
    ///
    /// Any earlier forbidden point expires here whether or not it was used.
    pub fn after_placement(before: &Board, ko_point: Option<Point>) -> Self {
        KoGuard {
            forbidden: ko_point,
            previous_board: Some(before.clone()),
        }
    }

    /// Guard for the move after a pass on `board`.
    pub fn after_pass(board: &Board) -> Self {
        KoGuard {
            forbidden: None,
            previous_board: Some(board.clone()),
        }
    }
}
