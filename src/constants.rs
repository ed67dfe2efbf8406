//! Constants for board dimensions, rule parameters, and influence models.
//!
//! Board shape is a runtime property (see [`crate::topology`]); the values
//! here are defaults used when the caller does not supply one.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default size of a regular square board.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Smallest square board the CLI accepts.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest square board the CLI accepts.
pub const MAX_BOARD_SIZE: usize = 25;

/// Orthogonal neighbour offsets as (row, col) deltas: North, South, West, East.
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Game Flow
// =============================================================================

/// Number of consecutive passes that ends the game.
pub const PASSES_TO_END: u32 = 2;

// =============================================================================
// Influence Field
// =============================================================================

/// Contribution of a stone to its own cell in the decay model.
pub const DECAY_BASE_POWER: f64 = 64.0;

/// Manhattan radius reached by a stone in the decay model.
pub const DECAY_RADIUS: usize = 3;

/// Per-step falloff factor of the decay model.
pub const DECAY_FACTOR: f64 = 0.5;

/// Contribution of a stone to its own cell in the legacy linear model.
pub const LINEAR_BASE: i64 = 19;

/// Cells at this Manhattan distance or further get nothing in the linear model.
pub const LINEAR_CUTOFF: usize = 19;

// =============================================================================
// Random Playouts
// =============================================================================

/// Default cap on actions in a random game, as a multiple of playable cells.
pub const PLAYOUT_LEN_FACTOR: usize = 3;
