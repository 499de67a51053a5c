//! go-rules: the rules engine for a small-board game of Go.
//!
//! This crate decides move legality (suicide and the single-stone ko
//! restriction included), resolves captures, sequences turns and passes,
//! and scores the board by territory plus captures with komi for White.
//! It performs no I/O; front ends drive it through the functions in
//! [`game`] and display the snapshots it returns.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, komi, and render glyphs
//! - [`board`] - Stones, colors, points, the grid, and coordinates
//! - [`group`] - Connected groups and liberty counting
//! - [`rules`] - Move validation
//! - [`capture`] - Applying accepted moves and tallying captures
//! - [`ko`] - The ko restriction
//! - [`scoring`] - Territory and final score
//! - [`game`] - Game state and turn sequencing
//! - [`console`] - Line-oriented text front end
//!
//! ## Example
//!
//! ```
//! use go_rules::board::Stone;
//! use go_rules::game::{new_game, place_stone};
//!
//! // White at the corner, then surrounded by Black.
//! let state = new_game(9);
//! let state = place_stone(&state, 0, 1).unwrap(); // Black
//! let state = place_stone(&state, 0, 0).unwrap(); // White
//! let state = place_stone(&state, 1, 0).unwrap(); // Black captures
//!
//! assert_eq!(state.black_captures(), 1);
//! assert_eq!(state.board()[go_rules::board::Point::new(0, 0)], Stone::Empty);
//! ```

pub mod board;
pub mod capture;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod ko;
pub mod rules;
pub mod scoring;

pub use board::{Board, Color, Point, Stone};
pub use error::{CoordError, MoveError};
pub use game::{
    GameState, Move, Phase, is_terminal, legal_moves, new_game, pass, place_stone, render, score,
};
pub use scoring::Score;
