//! Line-oriented text protocol for driving the engine.
//!
//! The protocol lets a referee or GUI harness play against the engine over
//! stdin/stdout. Each request is one line: an optional numeric id, a
//! command, and arguments. Responses are `=` (success) or `?` (failure)
//! followed by the echoed id and the payload, with a blank line after
//! each response.
//!
//! ## Supported Commands
//!
//! - `name` - Engine name
//! - `version` - Engine version
//! - `protocol_version` - Protocol revision (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check whether a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Reset the game
//! - `showboard` - Render the current board
//! - `play <move>` - Report the opposing side's move
//! - `force <move>` - Commit a move for the engine's side (test setup)
//! - `genmove` - Compute, commit, and report the engine's move
//!
//! Moves use the text form from [`crate::moves`]: `add <x> <y>`,
//! `step <x> <y> <from_x> <from_y>`, or `quit`.

use std::io::{self, BufRead, Write};

use crate::board::Color;
use crate::engine::Engine;
use crate::moves::Move;

/// The list of known protocol commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "force",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// Protocol front end wrapping one [`Engine`].
pub struct ProtocolEngine {
    engine: Engine,
}

impl ProtocolEngine {
    /// Create a protocol engine playing `color` with search depth `depth`.
    pub fn new(color: Color, depth: u32) -> Self {
        Self {
            engine: Engine::with_depth(color, depth),
        }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((&command, args)) = parts.split_first() else {
                continue;
            };

            let (success, message) = self.execute(command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(stdout, "{prefix}{id_str} {message}\n")?;
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of a line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let digits = trimmed.len() - trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits > 0 {
            if let Ok(id) = trimmed[..digits].parse::<u32>() {
                return (Some(id), trimmed[digits..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute one command and return (success, response payload).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "network-rs".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.engine.clear();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.engine.board())),

            "play" => match Self::parse_move(args) {
                Some(mv) => {
                    if self.engine.opponent_move(mv) {
                        (true, String::new())
                    } else {
                        (false, "illegal move".to_string())
                    }
                }
                None => (false, "cannot parse move".to_string()),
            },

            "force" => match Self::parse_move(args) {
                Some(mv) => {
                    if self.engine.force_move(mv) {
                        (true, String::new())
                    } else {
                        (false, "illegal move".to_string())
                    }
                }
                None => (false, "cannot parse move".to_string()),
            },

            "genmove" => {
                let mv = self.engine.choose_move();
                let mut reply = mv.to_string();
                if self.engine.has_won(self.engine.color()) {
                    reply.push_str(" (network completed)");
                }
                (true, reply)
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn parse_move(args: &[&str]) -> Option<Move> {
        args.join(" ").parse().ok()
    }
}
