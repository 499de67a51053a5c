//! End-of-game scoring.
//!
//! Territory is counted by flood-filling each empty region and noting which
//! colors border it. A region bordered by one color only belongs to that
//! color; anything else is dame. The final score is territory plus captures,
//! with komi added to White.

use std::collections::VecDeque;
use std::fmt;

use crate::board::{Board, Color, Stone};
use crate::capture::CaptureCounts;

/// Final result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    pub black_territory: u32,
    pub white_territory: u32,
    pub black_captures: u32,
    pub white_captures: u32,
    pub komi: f64,
    pub black_score: f64,
    pub white_score: f64,
}

impl Score {
    /// The player with the higher score, or `None` on an exact tie (only
    /// possible with an integral komi).
    pub fn winner(&self) -> Option<Color> {
        if self.black_score > self.white_score {
            Some(Color::Black)
        } else if self.white_score > self.black_score {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Difference between the winner's and the loser's score.
    pub fn margin(&self) -> f64 {
        (self.black_score - self.white_score).abs()
    }
}

impl fmt::Display for Score {
    /// `B+3.5`, `W+6.5`, or `0` for a tie.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(Color::Black) => write!(f, "B+{}", self.margin()),
            Some(Color::White) => write!(f, "W+{}", self.margin()),
            None => write!(f, "0"),
        }
    }
}

/// Count (black, white) territory on `board`.
pub fn territory(board: &Board) -> (u32, u32) {
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut black = 0u32;
    let mut white = 0u32;

    for start in board.points() {
        let si = start.row * size + start.col;
        if visited[si] || board[start] != Stone::Empty {
            continue;
        }

        let mut region = 0u32;
        let mut borders_black = false;
        let mut borders_white = false;
        let mut queue = VecDeque::from([start]);
        visited[si] = true;

        while let Some(pt) = queue.pop_front() {
            region += 1;
            for n in board.neighbors(pt) {
                match board[n] {
                    Stone::Empty => {
                        let ni = n.row * size + n.col;
                        if !visited[ni] {
                            visited[ni] = true;
                            queue.push_back(n);
                        }
                    }
                    Stone::Black => borders_black = true,
                    Stone::White => borders_white = true,
                }
            }
        }

        match (borders_black, borders_white) {
            (true, false) => black += region,
            (false, true) => white += region,
            _ => {} // dame
        }
    }

    (black, white)
}

/// Score `board` with the given captures and komi.
pub fn score(board: &Board, captures: CaptureCounts, komi: f64) -> Score {
    let (black_territory, white_territory) = territory(board);
    Score {
        black_territory,
        white_territory,
        black_captures: captures.black,
        white_captures: captures.white,
        komi,
        black_score: f64::from(black_territory + captures.black),
        white_score: f64::from(white_territory + captures.white) + komi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;
    use crate::constants::KOMI;

    #[test]
    fn test_empty_board_is_all_dame() {
        let board = Board::new(9);
        assert_eq!(territory(&board), (0, 0));
        let s = score(&board, CaptureCounts::default(), KOMI);
        assert_eq!(s.black_score, 0.0);
        assert_eq!(s.white_score, 6.5);
        assert_eq!(s.winner(), Some(Color::White));
        assert_eq!(s.to_string(), "W+6.5");
    }

    #[test]
    fn test_lone_stone_owns_board() {
        let mut board = Board::new(9);
        board.set(Point::new(4, 4), Stone::Black);
        assert_eq!(territory(&board), (80, 0));
    }

    #[test]
    fn test_wall_splits_territory() {
        // Black wall on column 2, white wall on column 3.
        let mut board = Board::new(9);
        for r in 0..9 {
            board.set(Point::new(r, 2), Stone::Black);
            board.set(Point::new(r, 3), Stone::White);
        }
        assert_eq!(territory(&board), (18, 45));
    }

    #[test]
    fn test_region_touching_both_is_dame() {
        // Two walls with a one-column gap between them.
        let mut board = Board::new(9);
        for r in 0..9 {
            board.set(Point::new(r, 2), Stone::Black);
            board.set(Point::new(r, 4), Stone::White);
        }
        // Left of black: 18; right of white: 36; the gap column touches both.
        assert_eq!(territory(&board), (18, 36));
    }

    #[test]
    fn test_captures_and_komi_added() {
        let mut board = Board::new(9);
        for r in 0..9 {
            board.set(Point::new(r, 4), Stone::Black);
            board.set(Point::new(r, 5), Stone::White);
        }
        let caps = CaptureCounts { black: 3, white: 1 };
        let s = score(&board, caps, KOMI);
        assert_eq!(s.black_territory, 36);
        assert_eq!(s.white_territory, 27);
        assert_eq!(s.black_score, 39.0);
        assert_eq!(s.white_score, 34.5);
        assert_eq!(s.winner(), Some(Color::Black));
        assert_eq!(s.to_string(), "B+4.5");
    }

    #[test]
    fn test_integral_komi_tie() {
        let board = Board::new(9);
        let s = score(&board, CaptureCounts::default(), 0.0);
        assert_eq!(s.winner(), None);
        assert_eq!(s.to_string(), "0");
    }
}
