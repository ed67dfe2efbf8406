//! Playable-cell layout of a board.
//!
//! A [`Topology`] is a rectangular grid with a boolean mask. A fully-filled
//! mask is a regular square board; anything else is an irregular board whose
//! blocked cells can never hold a stone and never count as liberties.

use std::fmt;

use crate::board::Point;
use crate::constants::DELTA;
use crate::error::TopologyError;

/// Immutable description of which cells of a `rows x cols` grid are playable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    rows: usize,
    cols: usize,
    mask: Vec<bool>,
}

impl Topology {
    /// A regular `size x size` board with every cell playable.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn square(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            rows: size,
            cols: size,
            mask: vec![true; size * size],
        }
    }

    /// Build a topology from a row-major mask of `1` (playable) and `0` (blocked).
    pub fn from_mask(mask: &[Vec<u8>]) -> Result<Self, TopologyError> {
        let rows = mask.len();
        let cols = mask.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(TopologyError::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in mask.iter().enumerate() {
            if line.len() != cols {
                return Err(TopologyError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &value) in line.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(TopologyError::InvalidCell { row, col, value }),
                }
            }
        }

        if !cells.contains(&true) {
            return Err(TopologyError::NoPlayableCell);
        }

        Ok(Self {
            rows,
            cols,
            mask: cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, playable or not.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// True iff `(row, col)` is inside the grid and the mask marks it playable.
    ///
    /// Takes signed coordinates so callers can probe off-board offsets directly.
    pub fn is_playable(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.rows && col < self.cols && self.mask[row * self.cols + col]
    }

    /// Same as [`Topology::is_playable`] for an unsigned point.
    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.rows && col < self.cols && self.mask[row * self.cols + col]
    }

    /// Playable orthogonal neighbours of a point.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        DELTA.iter().filter_map(move |&(dr, dc)| {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            self.is_playable(nr, nc).then_some((nr as usize, nc as usize))
        })
    }

    /// All playable points in row-major order.
    pub fn playable_points(&self) -> impl Iterator<Item = Point> + '_ {
        let cols = self.cols;
        self.mask
            .iter()
            .enumerate()
            .filter(|&(_, &playable)| playable)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    pub fn playable_count(&self) -> usize {
        self.mask.iter().filter(|&&playable| playable).count()
    }

    /// True when no cell is blocked.
    pub fn is_regular(&self) -> bool {
        self.mask.iter().all(|&playable| playable)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = if self.contains((row, col)) { '+' } else { ' ' };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
