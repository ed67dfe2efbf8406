//! Random games.
//!
//! A playout plays uniformly random legal moves for alternating sides until
//! the game ends or a move cap is reached. It is used by the CLI demo and to
//! drive long randomized sequences in tests.

use tracing::debug;

use crate::board::Point;
use crate::constants::PLAYOUT_LEN_FACTOR;
use crate::game::Game;

/// What happened during a playout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayoutSummary {
    /// Accepted placements.
    pub placements: usize,
    /// Passes, including the ones that ended the game.
    pub passes: usize,
    /// Candidate moves the engine rejected (suicide, ko) before one was found.
    pub rejections: usize,
}

impl PlayoutSummary {
    pub fn actions(&self) -> usize {
        self.placements + self.passes
    }
}

/// Default action cap for a game on this board.
pub fn default_max_moves(game: &Game) -> usize {
    game.state().topology().playable_count() * PLAYOUT_LEN_FACTOR
}

/// Play random moves until two consecutive passes or `max_moves` actions.
pub fn random_game(game: &mut Game, rng: &mut fastrand::Rng, max_moves: usize) -> PlayoutSummary {
    let mut summary = PlayoutSummary::default();

    while !game.is_game_over() && summary.actions() < max_moves {
        if play_random_move(game, rng, &mut summary) {
            summary.placements += 1;
        } else {
            game.pass();
            summary.passes += 1;
        }
    }

    debug!(
        placements = summary.placements,
        passes = summary.passes,
        rejections = summary.rejections,
        "playout finished"
    );
    summary
}

/// Try the empty playable points in random order until one is accepted.
///
/// Returns false if the side to move has no legal placement.
fn play_random_move(game: &mut Game, rng: &mut fastrand::Rng, summary: &mut PlayoutSummary) -> bool {
    let mut candidates: Vec<Point> = {
        let state = game.state();
        state
            .topology()
            .playable_points()
            .filter(|&pt| state.stone_at(pt).is_empty())
            .collect()
    };
    rng.shuffle(&mut candidates);

    for (row, col) in candidates {
        if game.play(row, col).is_ok() {
            return true;
        }
        summary.rejections += 1;
    }
    false
}
