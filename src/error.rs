//! Error types for the rules engine and coordinate parsing.

/// Why a placement or pass was refused.
///
/// Every variant is recoverable: the game state the request was made against
/// is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Point lies outside the board
    #[error("illegal move: point is off the board")]
    OutOfBounds,
    /// Point is not empty
    #[error("illegal move: point is occupied")]
    Occupied,
    /// Move would leave its own group without liberties and captures nothing
    #[error("illegal move: suicide")]
    Suicide,
    /// Move immediately retakes a single-stone ko
    #[error("illegal move: retakes ko")]
    KoViolation,
    /// Both players have passed; the game is over
    #[error("game is already over")]
    GameAlreadyOver,
}

/// Errors from parsing a vertex such as `D4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("empty coordinate")]
    Empty,

    #[error("invalid column letter '{0}'")]
    BadColumn(char),

    #[error("invalid row number in '{0}'")]
    BadRow(String),

    #[error("coordinate {vertex} is outside a {size}x{size} board")]
    OffBoard { vertex: String, size: usize },
}
