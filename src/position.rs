//! Board state and move adjudication.
//!
//! This module owns the mutable game state:
//! - Stone occupancy on a (possibly irregular) [`Topology`]
//! - Group and liberty analysis by breadth-first flood fill
//! - Capture, suicide and simplified ko adjudication
//! - Pass and turn tracking
//! - The influence field heuristic and its cache
//!
//! Placements are resolved on a scratch copy of the occupancy grid and only
//! committed when every rule passes, so a rejected move never leaves the
//! state partially mutated.

use std::cell::OnceCell;
use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::board::{Captures, Grid, MoveRecord, Player, Point, Stone};
use crate::constants::{
    DECAY_BASE_POWER, DECAY_FACTOR, DECAY_RADIUS, LINEAR_BASE, LINEAR_CUTOFF, PASSES_TO_END,
};
use crate::error::MoveError;
use crate::topology::Topology;

/// How stones radiate influence over the board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InfluenceModel {
    /// `±base_power * 0.5^d` on playable cells within Manhattan distance `radius`.
    Decay { base_power: f64, radius: usize },
    /// `±(base - d)` on every playable cell with `d < cutoff`.
    Linear { base: i64, cutoff: usize },
}

impl Default for InfluenceModel {
    fn default() -> Self {
        InfluenceModel::Decay {
            base_power: DECAY_BASE_POWER,
            radius: DECAY_RADIUS,
        }
    }
}

impl InfluenceModel {
    /// The full-board linear falloff used by older regular-board engines.
    pub fn linear() -> Self {
        InfluenceModel::Linear {
            base: LINEAR_BASE,
            cutoff: LINEAR_CUTOFF,
        }
    }
}

/// Engine options.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rules {
    pub influence: InfluenceModel,
    /// Reject a placement on the point the same player used for their
    /// previous stone, regardless of captures.
    pub forbid_own_last_move: bool,
}

/// A successfully applied placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub player: Player,
    /// Opposing stones removed by this move.
    pub captured: Vec<Point>,
}

/// Immutable copy of everything undo/redo needs to restore a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    stones: Grid<Stone>,
    captured: Captures,
    current_player: Player,
    last_moves: [Option<Point>; 2],
    move_log: Vec<MoveRecord>,
    previous_stones: Option<Grid<Stone>>,
    two_moves_ago_stones: Option<Grid<Stone>>,
    consecutive_passes: u32,
}

impl Snapshot {
    pub fn stones(&self) -> &Grid<Stone> {
        &self.stones
    }

    pub fn captured(&self) -> Captures {
        self.captured
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move_by(&self, player: Player) -> Option<Point> {
        self.last_moves[slot(player)]
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }
}

/// The mutable state of one game.
#[derive(Clone, Debug)]
pub struct BoardState {
    topology: Topology,
    rules: Rules,
    stones: Grid<Stone>,
    captured: Captures,
    current_player: Player,
    /// Indexed by [`slot`].
    last_moves: [Option<Point>; 2],
    /// Occupancy before the most recent accepted placement (ko reference).
    previous_stones: Option<Grid<Stone>>,
    two_moves_ago_stones: Option<Grid<Stone>>,
    move_log: Vec<MoveRecord>,
    consecutive_passes: u32,
    influence_cache: OnceCell<Grid<i64>>,
}

fn slot(player: Player) -> usize {
    match player {
        Player::Black => 0,
        Player::White => 1,
    }
}

impl BoardState {
    pub fn new(topology: Topology) -> Self {
        Self::with_rules(topology, Rules::default())
    }

    pub fn with_rules(topology: Topology, rules: Rules) -> Self {
        let stones = Grid::filled(topology.rows(), topology.cols(), Stone::Empty);
        Self {
            topology,
            rules,
            stones,
            captured: Captures::default(),
            current_player: Player::Black,
            last_moves: [None; 2],
            previous_stones: None,
            two_moves_ago_stones: None,
            move_log: Vec::new(),
            consecutive_passes: 0,
            influence_cache: OnceCell::new(),
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn stones(&self) -> &Grid<Stone> {
        &self.stones
    }

    /// Stone at `point`; off-board points read as empty.
    pub fn stone_at(&self, point: Point) -> Stone {
        self.stones.get(point).copied().unwrap_or_default()
    }

    pub fn captured(&self) -> Captures {
        self.captured
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move_by(&self, player: Player) -> Option<Point> {
        self.last_moves[slot(player)]
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn is_game_over(&self) -> bool {
        self.consecutive_passes >= PASSES_TO_END
    }

    /// Check whether `player` may place at `(row, col)` without changing anything.
    pub fn check_move(&self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        self.resolve((row, col), player).map(|_| ())
    }

    /// Place `player`'s stone at `(row, col)`, resolving captures.
    ///
    /// # Errors
    /// - [`MoveError::InvalidPosition`] if the point is off the board or blocked
    /// - [`MoveError::CellOccupied`] if the point already holds a stone
    /// - [`MoveError::RepeatsOwnLastMove`] if the legacy rule is enabled and violated
    /// - [`MoveError::SuicideMove`] if the new group has no liberty and nothing was captured
    /// - [`MoveError::KoViolation`] if the result equals the board before the last placement
    pub fn place_stone(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Placement, MoveError> {
        let point = (row, col);
        let (next, captured) = self.resolve(point, player).inspect_err(|err| {
            debug!(row, col, %player, reason = %err, "move rejected");
        })?;

        if !captured.is_empty() {
            trace!(row, col, %player, count = captured.len(), "stones captured");
            self.captured.add(player.opponent(), captured.len() as u64);
        }

        let before = std::mem::replace(&mut self.stones, next);
        self.two_moves_ago_stones = self.previous_stones.replace(before);
        self.last_moves[slot(player)] = Some(point);
        self.move_log.push(MoveRecord { point, player });
        self.current_player = player.opponent();
        self.consecutive_passes = 0;
        self.invalidate_influence();

        Ok(Placement {
            point,
            player,
            captured,
        })
    }

    /// Apply the rules to a scratch copy of the board.
    ///
    /// Returns the resulting occupancy and the captured points.
    fn resolve(
        &self,
        point: Point,
        player: Player,
    ) -> Result<(Grid<Stone>, Vec<Point>), MoveError> {
        if !self.topology.contains(point) {
            return Err(MoveError::InvalidPosition);
        }
        if !self.stones[point].is_empty() {
            return Err(MoveError::CellOccupied);
        }
        if self.rules.forbid_own_last_move && self.last_moves[slot(player)] == Some(point) {
            return Err(MoveError::RepeatsOwnLastMove);
        }

        let mut next = self.stones.clone();
        next[point] = player.stone();

        let captured = dead_groups(&self.topology, &next, player.opponent());
        for &pt in &captured {
            next[pt] = Stone::Empty;
        }

        if captured.is_empty() && !has_liberty(&self.topology, &next, point) {
            return Err(MoveError::SuicideMove);
        }

        if self.previous_stones.as_ref() == Some(&next) {
            return Err(MoveError::KoViolation);
        }

        Ok((next, captured))
    }

    /// Pass the turn. Occupancy and the influence field are unchanged.
    pub fn pass_turn(&mut self) {
        self.consecutive_passes += 1;
        self.current_player = self.current_player.opponent();
        debug!(passes = self.consecutive_passes, "turn passed");
    }

    /// Number of distinct liberties of the group containing `point`.
    ///
    /// Returns 0 for empty or off-board points.
    pub fn liberties(&self, point: Point) -> usize {
        match self.stones.get(point) {
            Some(s) if !s.is_empty() => {
                let mut visited = Grid::filled(self.stones.rows(), self.stones.cols(), false);
                scan_group(&self.topology, &self.stones, point, &mut visited).liberties
            }
            _ => 0,
        }
    }

    /// All stones connected to `point`, empty for empty or off-board points.
    pub fn group_at(&self, point: Point) -> Vec<Point> {
        match self.stones.get(point) {
            Some(s) if !s.is_empty() => {
                let mut visited = Grid::filled(self.stones.rows(), self.stones.cols(), false);
                scan_group(&self.topology, &self.stones, point, &mut visited).stones
            }
            _ => Vec::new(),
        }
    }

    /// Move-log entries whose stone is still on the board.
    ///
    /// Only the latest placement at each point qualifies. Entries are
    /// `(move_number, record)` with 1-based move numbers in chronological
    /// order, so the last element is the most recent surviving move.
    pub fn live_move_order(&self) -> Vec<(usize, MoveRecord)> {
        let latest: HashMap<Point, usize> = self
            .move_log
            .iter()
            .enumerate()
            .map(|(i, rec)| (rec.point, i))
            .collect();

        self.move_log
            .iter()
            .enumerate()
            .filter(|&(i, rec)| {
                self.stones[rec.point] == rec.player.stone() && latest.get(&rec.point) == Some(&i)
            })
            .map(|(i, rec)| (i + 1, *rec))
            .collect()
    }

    /// Per-cell influence, positive for Black and negative for White.
    ///
    /// Computed on first use after any change in occupancy and cached.
    pub fn calculate_influence(&self) -> &Grid<i64> {
        self.influence_cache.get_or_init(|| {
            trace!(moves = self.move_log.len(), "recomputing influence field");
            influence_field(&self.topology, &self.stones, self.rules.influence)
        })
    }

    /// True when the influence field is cached.
    pub fn influence_is_cached(&self) -> bool {
        self.influence_cache.get().is_some()
    }

    fn invalidate_influence(&mut self) {
        self.influence_cache.take();
    }

    /// Copy of the state for the history manager.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stones: self.stones.clone(),
            captured: self.captured,
            current_player: self.current_player,
            last_moves: self.last_moves,
            move_log: self.move_log.clone(),
            previous_stones: self.previous_stones.clone(),
            two_moves_ago_stones: self.two_moves_ago_stones.clone(),
            consecutive_passes: self.consecutive_passes,
        }
    }

    /// Overwrite the live state with `snapshot` and drop the influence cache.
    pub fn set_snapshot(&mut self, snapshot: &Snapshot) {
        debug_assert_eq!(snapshot.stones.rows(), self.topology.rows());
        debug_assert_eq!(snapshot.stones.cols(), self.topology.cols());
        self.stones = snapshot.stones.clone();
        self.captured = snapshot.captured;
        self.current_player = snapshot.current_player;
        self.last_moves = snapshot.last_moves;
        self.move_log = snapshot.move_log.clone();
        self.previous_stones = snapshot.previous_stones.clone();
        self.two_moves_ago_stones = snapshot.two_moves_ago_stones.clone();
        self.consecutive_passes = snapshot.consecutive_passes;
        self.invalidate_influence();
    }
}

/// Result of flood-filling one group.
struct GroupScan {
    stones: Vec<Point>,
    liberties: usize,
}

/// Breadth-first walk over the group containing `start`.
///
/// Marks every stone of the group in `visited`, so a caller scanning the
/// whole board visits each stone once.
fn scan_group(
    topology: &Topology,
    stones: &Grid<Stone>,
    start: Point,
    visited: &mut Grid<bool>,
) -> GroupScan {
    let color = stones[start];
    let mut group = Vec::new();
    let mut liberties = HashSet::new();
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(pt) = queue.pop_front() {
        group.push(pt);
        for n in topology.neighbors(pt) {
            match stones[n] {
                Stone::Empty => {
                    liberties.insert(n);
                }
                s if s == color && !visited[n] => {
                    visited[n] = true;
                    queue.push_back(n);
                }
                _ => {}
            }
        }
    }

    GroupScan {
        stones: group,
        liberties: liberties.len(),
    }
}

/// True if the group at `start` touches at least one empty playable cell.
fn has_liberty(topology: &Topology, stones: &Grid<Stone>, start: Point) -> bool {
    let mut visited = Grid::filled(stones.rows(), stones.cols(), false);
    scan_group(topology, stones, start, &mut visited).liberties > 0
}

/// Every stone of `victim` that belongs to a group without liberties.
fn dead_groups(topology: &Topology, stones: &Grid<Stone>, victim: Player) -> Vec<Point> {
    let target = victim.stone();
    let mut visited = Grid::filled(stones.rows(), stones.cols(), false);
    let mut dead = Vec::new();

    for pt in topology.playable_points() {
        if stones[pt] != target || visited[pt] {
            continue;
        }
        let group = scan_group(topology, stones, pt, &mut visited);
        if group.liberties == 0 {
            dead.extend(group.stones);
        }
    }
    dead
}

fn influence_field(topology: &Topology, stones: &Grid<Stone>, model: InfluenceModel) -> Grid<i64> {
    let (rows, cols) = (topology.rows(), topology.cols());
    match model {
        InfluenceModel::Decay { base_power, radius } => {
            let mut field = Grid::filled(rows, cols, 0.0f64);
            let r = radius as isize;
            for (pt, stone) in stones.iter() {
                let base = match stone {
                    Stone::Empty => continue,
                    Stone::Black => base_power,
                    Stone::White => -base_power,
                };
                for dr in -r..=r {
                    for dc in -r..=r {
                        let distance = dr.unsigned_abs() + dc.unsigned_abs();
                        if distance > radius {
                            continue;
                        }
                        let nr = pt.0 as isize + dr;
                        let nc = pt.1 as isize + dc;
                        if topology.is_playable(nr, nc) {
                            field[(nr as usize, nc as usize)] +=
                                base * DECAY_FACTOR.powi(distance as i32);
                        }
                    }
                }
            }

            let mut rounded = Grid::filled(rows, cols, 0i64);
            for (pt, &value) in field.iter() {
                rounded[pt] = value.round_ties_even() as i64;
            }
            rounded
        }
        InfluenceModel::Linear { base, cutoff } => {
            let mut field = Grid::filled(rows, cols, 0i64);
            for (pt, stone) in stones.iter() {
                let sign = match stone {
                    Stone::Empty => continue,
                    Stone::Black => 1,
                    Stone::White => -1,
                };
                for target in topology.playable_points() {
                    let distance = pt.0.abs_diff(target.0) + pt.1.abs_diff(target.1);
                    if distance < cutoff {
                        field[target] += sign * (base - distance as i64);
                    }
                }
            }
            field
        }
    }
}
