//! Constants for board dimensions, scoring, and rendering.
//!
//! # Board Size Configuration
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! The engine itself works for any size passed to [`crate::game::new_game`];
//! the feature only picks what the binary and [`crate::game::GameState::default`]
//! start with.
//!
//! ```sh
//! cargo build                           # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Largest size that can be labelled with Go column letters (A-Z without I).
pub const MAX_SIZE: usize = 25;

/// Column letters in Go order. 'I' is skipped to avoid confusion with 'J'.
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Scoring
// =============================================================================

/// Komi (compensation points for White).
pub const KOMI: f64 = 6.5;

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

// =============================================================================
// Rendering Glyphs
// =============================================================================

/// Black stone.
pub const GLYPH_BLACK: char = 'X';

/// White stone.
pub const GLYPH_WHITE: char = 'O';

/// Empty point.
pub const GLYPH_EMPTY: char = '.';
