//! Game state and turn sequencing.
//!
//! A [`GameState`] is an immutable snapshot. [`place_stone`] and [`pass`]
//! take the current snapshot and return the next one; on error the input is
//! returned untouched by construction, since nothing is written until a move
//! has been fully validated.
//!
//! ```
//! use go_rules::game::{new_game, pass, place_stone, score};
//!
//! let state = new_game(9);
//! let state = place_stone(&state, 4, 4).unwrap();
//! let state = pass(&state).unwrap();
//! let state = pass(&state).unwrap();
//! let result = score(&state).unwrap();
//! assert_eq!(result.black_territory, 80);
//! ```

use std::fmt;

use log::{debug, info};

use crate::board::{Board, Color, Point, str_coord};
use crate::capture::{self, CaptureCounts};
use crate::constants::{KOMI, N, PASSES_TO_END};
use crate::error::MoveError;
use crate::ko::KoGuard;
use crate::rules;
use crate::scoring::{self, Score};

/// Whether moves are still accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Finished,
}

/// A move as recorded in [`GameState::last_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Place(Point),
    Pass,
}

/// A snapshot of a game between moves.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    to_move: Color,
    ko: KoGuard,
    captures: CaptureCounts,
    consecutive_passes: u32,
    phase: Phase,
    komi: f64,
    /// Placements and passes played so far
    move_number: u32,
    last_move: Option<Move>,
    /// Filled in once, when the game finishes
    result: Option<Score>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(N)
    }
}

impl GameState {
    /// Empty board, Black to move, standard komi.
    pub fn new(size: usize) -> Self {
        Self::with_komi(size, KOMI)
    }

    pub fn with_komi(size: usize, komi: f64) -> Self {
        GameState {
            board: Board::new(size),
            to_move: Color::Black,
            ko: KoGuard::new(),
            captures: CaptureCounts::default(),
            consecutive_passes: 0,
            phase: Phase::Playing,
            komi,
            move_number: 0,
            last_move: None,
            result: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_player(&self) -> Color {
        self.to_move
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn black_captures(&self) -> u32 {
        self.captures.black
    }

    pub fn white_captures(&self) -> u32 {
        self.captures.white
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    /// Point the player to move may not play because of ko.
    pub fn ko_point(&self) -> Option<Point> {
        self.ko.forbidden_point()
    }

    /// Board before the most recent placement, or at the most recent pass.
    pub fn previous_board(&self) -> Option<&Board> {
        self.ko.previous_board()
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Final score; `None` until the game has finished.
    pub fn score(&self) -> Option<Score> {
        self.result
    }
}

/// Start a new game on an empty `size` x `size` board.
///
/// Any size is accepted, but coordinates are only lettered up to
/// [`MAX_SIZE`](crate::constants::MAX_SIZE), and the board holds
/// `size * size` cells.
///
/// # Panics
/// If `size * size` overflows `usize`.
pub fn new_game(size: usize) -> GameState {
    GameState::new(size)
}

/// Play a stone for the current player at (`row`, `col`).
///
/// # Errors
/// - `GameAlreadyOver` - both players have passed
/// - `OutOfBounds`, `Occupied`, `Suicide`, `KoViolation` - see
///   [`rules::validate`]
pub fn place_stone(state: &GameState, row: usize, col: usize) -> Result<GameState, MoveError> {
    if state.is_terminal() {
        return Err(MoveError::GameAlreadyOver);
    }

    let pt = Point::new(row, col);
    let player = state.to_move;
    let accepted = rules::validate(&state.board, &state.ko, pt, player).inspect_err(|e| {
        debug!("{player} at ({row}, {col}) rejected: {e}");
    })?;

    let mut next = state.clone();
    capture::apply(&mut next.board, &accepted, &mut next.captures);
    next.ko = KoGuard::after_placement(&state.board, accepted.ko_point);
    if let Some(ko) = accepted.ko_point {
        debug!("ko at {}", str_coord(ko, next.size()));
    }
    next.consecutive_passes = 0;
    next.to_move = player.opponent();
    next.move_number += 1;
    next.last_move = Some(Move::Place(pt));
    Ok(next)
}

/// Pass for the current player. The second consecutive pass ends the game
/// and scores it.
///
/// # Errors
/// - `GameAlreadyOver` - the game had already finished
pub fn pass(state: &GameState) -> Result<GameState, MoveError> {
    if state.is_terminal() {
        return Err(MoveError::GameAlreadyOver);
    }

    let mut next = state.clone();
    next.consecutive_passes += 1;
    next.ko = KoGuard::after_pass(&state.board);
    next.to_move = state.to_move.opponent();
    next.move_number += 1;
    next.last_move = Some(Move::Pass);
    debug!("{} passes", state.to_move);

    if next.consecutive_passes >= PASSES_TO_END {
        let result = scoring::score(&next.board, next.captures, next.komi);
        info!(
            "game over after {} moves: black {} white {} ({result})",
            next.move_number, result.black_score, result.white_score
        );
        next.phase = Phase::Finished;
        next.result = Some(result);
    }
    Ok(next)
}

pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}

/// Final score, available once the game has finished.
pub fn score(state: &GameState) -> Option<Score> {
    state.score()
}

/// Every point the player to move may play. Empty once the game is over.
pub fn legal_moves(state: &GameState) -> Vec<Point> {
    if state.is_terminal() {
        return Vec::new();
    }
    rules::legal_moves(&state.board, &state.ko, state.to_move)
}

/// Board grid followed by capture counts and whose turn it is.
pub fn render(state: &GameState) -> String {
    state.to_string()
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(
            f,
            "Black captures: {}, White captures: {}",
            self.captures.black, self.captures.white
        )?;
        match self.result {
            Some(result) => write!(f, "Game over: {result}"),
            None => write!(f, "{} to move", self.to_move),
        }
    }
}
