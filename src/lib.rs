//! goban-rules: a Go (Weiqi) rules engine for regular and irregular boards.
//!
//! The engine is a pure state machine: it knows nothing about pixels or input
//! devices. A caller builds a [`topology::Topology`] (a square board or an
//! arbitrary playable mask), wraps it in a [`game::Game`], and issues commands.
//!
//! ## Modules
//!
//! - [`constants`] - Default sizes and rule parameters
//! - [`board`] - Players, stones, points and grids
//! - [`topology`] - Which cells of the board are playable
//! - [`position`] - Board state, captures, suicide/ko rules, influence field
//! - [`history`] - Snapshot-based undo/redo
//! - [`game`] - Command handler combining state and history
//! - [`config`] - JSON board configuration files
//! - [`playout`] - Random games
//! - [`console`] - Text command protocol
//!
//! ## Example
//!
//! ```
//! use goban_rules::game::Game;
//! use goban_rules::topology::Topology;
//!
//! let mut game = Game::new(Topology::square(9));
//! game.play(2, 2).unwrap();
//! game.play(6, 6).unwrap();
//! assert_eq!(game.state().move_log().len(), 2);
//!
//! assert!(game.undo());
//! assert_eq!(game.state().move_log().len(), 1);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod history;
pub mod playout;
pub mod position;
pub mod topology;

pub use board::{Captures, Grid, MoveRecord, Player, Point, Stone};
pub use error::{ConfigError, MoveError, TopologyError};
pub use game::Game;
pub use position::{BoardState, InfluenceModel, Placement, Rules, Snapshot};
pub use topology::Topology;
