//! Board representation: stones, colors, points, and the grid itself.
//!
//! The board is a plain row-major `Vec<Stone>` of `size * size` cells with no
//! padding. Bounds are checked symmetrically on both axes, and neighbor
//! iteration never yields an off-board point, so edges and corners simply
//! have fewer neighbors.

use std::fmt;
use std::ops::Index;

use crate::constants::{COLUMN_LETTERS, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE};
use crate::error::CoordError;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Contents of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// The color of the stone, or `None` for an empty point.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Stone::Empty => None,
            Stone::Black => Some(Color::Black),
            Stone::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }

    fn glyph(self) -> char {
        match self {
            Stone::Empty => GLYPH_EMPTY,
            Stone::Black => GLYPH_BLACK,
            Stone::White => GLYPH_WHITE,
        }
    }
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

/// An intersection, addressed by row (0 = top) and column (0 = left).
///
/// Points order row-major, which is the order groups and capture sets are
/// reported in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }
}

/// An NxN grid of stones.
///
/// Boards are values: cloning gives an independent copy, and equality is
/// cell-by-cell, which is what the whole-board ko comparison relies on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// # Panics
    /// If `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        let cells = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("board size {size} is too large"));
        Self {
            size,
            cells: vec![Stone::Empty; cells],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        p.row * self.size + p.col
    }

    /// `0 <= row < size` and `0 <= col < size`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row < self.size && p.col < self.size
    }

    /// The stone at `p`, or `None` if `p` is off the board.
    pub fn get(&self, p: Point) -> Option<Stone> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.idx(p)])
    }

    /// Overwrite the point `p`.
    ///
    /// Writing off the board is a caller bug: it panics in debug builds and
    /// is ignored in release builds.
    pub fn set(&mut self, p: Point, stone: Stone) {
        debug_assert!(self.contains(p), "set {p:?} outside {0}x{0} board", self.size);
        if self.contains(p) {
            let i = self.idx(p);
            self.cells[i] = stone;
        }
    }

    /// The on-board orthogonal neighbors of `p` (N, S, W, E).
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        let Point { row, col } = p;
        [
            row.checked_sub(1).map(|r| Point::new(r, col)),
            (row + 1 < size).then(|| Point::new(row + 1, col)),
            col.checked_sub(1).map(|c| Point::new(row, c)),
            (col + 1 < size).then(|| Point::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Every point of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Point::new(row, col)))
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        let stone = Stone::from(color);
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// True if no stone has been placed.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|s| s.is_empty())
    }
}

impl Index<Point> for Board {
    type Output = Stone;

    /// Panics if `p` is off the board; use [`Board::get`] for unchecked input.
    fn index(&self, p: Point) -> &Stone {
        assert!(self.contains(p), "point {p:?} outside {0}x{0} board", self.size);
        &self.cells[self.idx(p)]
    }
}

/// Letter for a column index, or '?' past the lettered range.
pub fn column_letter(col: usize) -> char {
    COLUMN_LETTERS.get(col).map_or('?', |&b| b as char)
}

/// Parse a coordinate string (e.g., "D4") into a point on a board of `size`.
///
/// Columns use letters A-Z skipping I; rows are numbered from 1 at the
/// bottom edge, so "A1" is the lower-left corner.
pub fn parse_coord(s: &str, size: usize) -> Result<Point, CoordError> {
    let s = s.trim();
    let mut chars = s.chars();
    let first = chars.next().ok_or(CoordError::Empty)?;
    let letter = first.to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&b| b as char == letter)
        .ok_or(CoordError::BadColumn(first))?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::BadRow(s.to_string()));
    }
    let number: usize = digits
        .parse()
        .map_err(|_| CoordError::BadRow(s.to_string()))?;

    if number == 0 || number > size || col >= size {
        return Err(CoordError::OffBoard {
            vertex: s.to_string(),
            size,
        });
    }
    Ok(Point::new(size - number, col))
}

/// Convert a point to a coordinate string (e.g., "D4").
pub fn str_coord(p: Point, size: usize) -> String {
    format!("{}{}", column_letter(p.col), size.saturating_sub(p.row))
}

impl fmt::Display for Board {
    /// Fixed-width grid with column letters above and below and row numbers
    /// on both sides, one glyph per intersection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();
        let header: String = (0..self.size)
            .map(|c| column_letter(c).to_string())
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(f, "{:width$} {header}", "")?;
        for row in 0..self.size {
            let label = self.size - row;
            write!(f, "{label:>width$}")?;
            for col in 0..self.size {
                write!(f, " {}", self[Point::new(row, col)].glyph())?;
            }
            writeln!(f, " {label:<width$}")?;
        }
        writeln!(f, "{:width$} {header}", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9);
        assert_eq!(board.size(), 9);
        assert!(board.is_empty());
        assert_eq!(board.points().count(), 81);
    }

    #[test]
    fn test_neighbor_counts() {
        let board = Board::new(9);
        assert_eq!(board.neighbors(Point::new(0, 0)).count(), 2);
        assert_eq!(board.neighbors(Point::new(8, 8)).count(), 2);
        assert_eq!(board.neighbors(Point::new(0, 4)).count(), 3);
        assert_eq!(board.neighbors(Point::new(4, 8)).count(), 3);
        assert_eq!(board.neighbors(Point::new(4, 4)).count(), 4);
    }

    #[test]
    fn test_bounds_symmetric() {
        let board = Board::new(9);
        assert!(board.contains(Point::new(8, 8)));
        assert!(!board.contains(Point::new(9, 0)));
        assert!(!board.contains(Point::new(0, 9)));
        assert_eq!(board.get(Point::new(0, 9)), None);
    }

    #[test]
    fn test_set_and_count() {
        let mut board = Board::new(5);
        board.set(Point::new(1, 1), Stone::Black);
        board.set(Point::new(2, 2), Stone::White);
        assert_eq!(board.count(Color::Black), 1);
        assert_eq!(board.count(Color::White), 1);
        assert_eq!(board[Point::new(1, 1)], Stone::Black);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 5x5 board")]
    fn test_set_off_board_panics_in_debug() {
        let mut board = Board::new(5);
        board.set(Point::new(7, 7), Stone::White);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_new_rejects_overflowing_size() {
        Board::new(usize::MAX);
    }

    #[test]
    fn test_parse_coord_corners() {
        assert_eq!(parse_coord("A1", 9), Ok(Point::new(8, 0)));
        assert_eq!(parse_coord("A9", 9), Ok(Point::new(0, 0)));
        assert_eq!(parse_coord("J9", 9), Ok(Point::new(0, 8)));
        assert_eq!(parse_coord("j1", 9), Ok(Point::new(8, 8)));
    }

    #[test]
    fn test_parse_coord_skips_i() {
        assert_eq!(parse_coord("I5", 9), Err(CoordError::BadColumn('I')));
        let h = parse_coord("H5", 9).unwrap();
        let j = parse_coord("J5", 9).unwrap();
        assert_eq!(j.col - h.col, 1);
    }

    #[test]
    fn test_parse_coord_errors() {
        assert_eq!(parse_coord("", 9), Err(CoordError::Empty));
        assert!(matches!(parse_coord("D", 9), Err(CoordError::BadRow(_))));
        assert!(matches!(parse_coord("D4x", 9), Err(CoordError::BadRow(_))));
        assert!(matches!(parse_coord("D0", 9), Err(CoordError::OffBoard { .. })));
        assert!(matches!(parse_coord("D10", 9), Err(CoordError::OffBoard { .. })));
        assert!(matches!(parse_coord("K1", 9), Err(CoordError::OffBoard { .. })));
    }

    #[test]
    fn test_str_coord_roundtrip() {
        let board = Board::new(9);
        for p in board.points() {
            let s = str_coord(p, 9);
            assert_eq!(parse_coord(&s, 9), Ok(p), "roundtrip failed for {s}");
        }
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new(3);
        board.set(Point::new(0, 0), Stone::Black);
        board.set(Point::new(2, 2), Stone::White);
        let expected = "  A B C\n3 X . . 3\n2 . . . 2\n1 . . O 1\n  A B C\n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_display_two_digit_labels() {
        let board = Board::new(13);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 15);
        assert!(lines[1].starts_with("13 ."));
        assert!(lines[13].starts_with(" 1 ."));
        // Every line has the same width.
        assert!(lines.iter().skip(1).take(13).all(|l| l.len() == lines[1].len()));
    }

    #[test]
    fn test_display_rows_fixed_width_at_ten() {
        let board = Board::new(10);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "10 . . . . . . . . . . 10");
        assert_eq!(lines[10], " 1 . . . . . . . . . . 1 ");
        let rows = &lines[1..=10];
        assert!(rows.iter().all(|l| l.len() == rows[0].len()), "{rows:?}");
    }
}
