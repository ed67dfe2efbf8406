//! Command handler that pairs a board state with its undo history.
//!
//! Every accepted placement or pass records a snapshot; rejected moves leave
//! both the state and the history untouched.

use crate::board::Player;
use crate::error::MoveError;
use crate::history::HistoryManager;
use crate::position::{BoardState, Placement, Rules};
use crate::topology::Topology;

/// One game, exclusively owned by whoever drives it.
#[derive(Clone, Debug)]
pub struct Game {
    state: BoardState,
    history: HistoryManager,
}

impl Game {
    pub fn new(topology: Topology) -> Self {
        Self::with_rules(topology, Rules::default())
    }

    pub fn with_rules(topology: Topology, rules: Rules) -> Self {
        let state = BoardState::with_rules(topology, rules);
        let history = HistoryManager::new(state.snapshot());
        Self { state, history }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Place a stone for the side to move.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        let player = self.state.current_player();
        self.place_stone(row, col, player)
    }

    /// Place a stone for an explicit player.
    pub fn place_stone(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Placement, MoveError> {
        let placed = self.state.place_stone(row, col, player)?;
        self.history.push(self.state.snapshot());
        Ok(placed)
    }

    /// Pass for the side to move. Returns true when this ends the game.
    pub fn pass(&mut self) -> bool {
        self.state.pass_turn();
        self.history.push(self.state.snapshot());
        self.state.is_game_over()
    }

    /// Undo the last placement or pass. Returns false at the initial position.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.state).is_some()
    }

    /// Redo the last undone action. Returns false when nothing was undone.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.state).is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}
