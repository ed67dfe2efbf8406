//! Line-oriented text console for driving a game.
//!
//! The framing follows GTP: each command may carry a numeric id, and every
//! response is `=[id] text` on success or `?[id] text` on failure, followed by
//! a blank line. Coordinates are zero-based `row col` pairs.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`, `quit`
//! - `play <row> <col>` - place a stone for the side to move
//! - `pass`, `undo`, `redo`, `clear_board`
//! - `showboard` - current occupancy (`X` black, `O` white, blank = blocked)
//! - `captures` - captured stone counters by colour
//! - `turn` - side to move
//! - `influence` - the influence field
//! - `order` - surviving stones with their move numbers
//! - `game_over` - `true` after two consecutive passes

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::Stone;
use crate::game::Game;
use crate::position::Rules;
use crate::topology::Topology;

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "captures",
    "clear_board",
    "game_over",
    "influence",
    "known_command",
    "list_commands",
    "name",
    "order",
    "pass",
    "play",
    "quit",
    "redo",
    "showboard",
    "turn",
    "undo",
    "version",
];

/// Console session state.
pub struct Console {
    game: Game,
    topology: Topology,
    rules: Rules,
}

impl Console {
    pub fn new(topology: Topology, rules: Rules) -> Self {
        Self {
            game: Game::with_rules(topology.clone(), rules),
            topology,
            rules,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands from `input` until EOF or `quit`, answering on `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
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
        debug!(command, ?args, "console command");
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game = Game::with_rules(self.topology.clone(), self.rules);
                (true, String::new())
            }

            "play" => {
                let [row, col] = args else {
                    return (false, "expected: play <row> <col>".to_string());
                };
                let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
                    return (false, "invalid coordinate".to_string());
                };
                match self.game.play(row, col) {
                    Ok(placed) if placed.captured.is_empty() => (true, String::new()),
                    Ok(placed) => (true, format!("captured {}", placed.captured.len())),
                    Err(err) => (false, err.to_string()),
                }
            }

            "pass" => {
                let over = self.game.pass();
                (true, if over { "game over" } else { "" }.to_string())
            }

            "undo" => {
                if self.game.undo() {
                    (true, String::new())
                } else {
                    (false, "cannot undo".to_string())
                }
            }

            "redo" => {
                if self.game.redo() {
                    (true, String::new())
                } else {
                    (false, "cannot redo".to_string())
                }
            }

            "showboard" => (true, format!("\n{}", self.render_board())),

            "captures" => {
                let caps = self.game.state().captured();
                (true, format!("black {} white {}", caps.black, caps.white))
            }

            "turn" => (true, self.game.state().current_player().to_string()),

            "influence" => (true, format!("\n{}", self.render_influence())),

            "order" => {
                let lines: Vec<String> = self
                    .game
                    .state()
                    .live_move_order()
                    .iter()
                    .map(|(n, rec)| format!("{n} {} {} {}", rec.player, rec.point.0, rec.point.1))
                    .collect();
                (true, lines.join("\n"))
            }

            "game_over" => (true, self.game.is_game_over().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn render_board(&self) -> String {
        let state = self.game.state();
        let topo = state.topology();
        let mut out = String::new();
        for row in 0..topo.rows() {
            for col in 0..topo.cols() {
                let ch = if !topo.contains((row, col)) {
                    ' '
                } else {
                    match state.stone_at((row, col)) {
                        Stone::Black => 'X',
                        Stone::White => 'O',
                        Stone::Empty => '.',
                    }
                };
                out.push(ch);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    fn render_influence(&self) -> String {
        let state = self.game.state();
        let topo = state.topology();
        let field = state.calculate_influence();
        let mut out = String::new();
        for row in 0..topo.rows() {
            for col in 0..topo.cols() {
                if topo.contains((row, col)) {
                    let _ = write!(out, "{:>5}", field[(row, col)]);
                } else {
                    out.push_str("     ");
                }
            }
            out.push('\n');
        }
        out
    }
}
