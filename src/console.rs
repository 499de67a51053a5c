//! Line-oriented text console for playing a game.
//!
//! Commands follow the shape of the Go Text Protocol: an optional numeric
//! id, a command word, and arguments. Each response is `=id message` on
//! success or `?id message` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` / `version` - Engine identification
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `boardsize <size>` - Start a new game on a board of that size
//! - `clear_board` - Start a new game with the current size and komi
//! - `komi <value>` - Set komi (only before the first move)
//! - `play <vertex>` - Play for the side to move (`D4` or `pass`)
//! - `pass` - Pass for the side to move
//! - `showboard` - Render the board
//! - `score` - Final result once both players have passed
//! - `quit` - Exit the loop

use std::io::{BufRead, Write};

use log::debug;

use crate::board::parse_coord;
use crate::constants::MAX_SIZE;
use crate::game::{self, GameState};

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "pass",
    "play",
    "quit",
    "score",
    "showboard",
    "version",
];

/// Console state: the game being played.
pub struct Console {
    state: GameState,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}

impl Console {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// The current game snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!("console command: {command} {args:?}");
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (1..=MAX_SIZE).contains(&size) => {
                        self.state = GameState::with_komi(size, self.state.komi());
                        (true, String::new())
                    }
                    Ok(size) => (
                        false,
                        format!("unacceptable size {size}, must be 1 to {MAX_SIZE}"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.state = GameState::with_komi(self.state.size(), self.state.komi());
                (true, String::new())
            }

            "komi" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                if self.state.move_number() > 0 {
                    return (false, "komi can only be set before the first move".to_string());
                }
                match arg.parse::<f64>() {
                    Ok(komi) if komi.is_finite() => {
                        self.state = GameState::with_komi(self.state.size(), komi);
                        (true, String::new())
                    }
                    _ => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                // Accept both `play D4` and `play black D4`; the color is
                // always the side to move.
                let Some(vertex) = args.last() else {
                    return (false, "missing arguments".to_string());
                };
                if vertex.eq_ignore_ascii_case("pass") {
                    return self.pass();
                }
                let pt = match parse_coord(vertex, self.state.size()) {
                    Ok(pt) => pt,
                    Err(e) => return (false, e.to_string()),
                };
                match game::place_stone(&self.state, pt.row, pt.col) {
                    Ok(next) => {
                        self.state = next;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "pass" => self.pass(),

            "showboard" => (true, format!("\n{}", game::render(&self.state))),

            "score" => match game::score(&self.state) {
                Some(result) => (true, result.to_string()),
                None => (false, "game is still in progress".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn pass(&mut self) -> (bool, String) {
        match game::pass(&self.state) {
            Ok(next) => {
                self.state = next;
                (true, String::new())
            }
            Err(e) => (false, e.to_string()),
        }
    }
}
