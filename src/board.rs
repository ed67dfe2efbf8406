//! Board primitives: players, stones, points and 2D grids.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A cell on the board as `(row, col)`.
pub type Point = (usize, usize);

/// A player, encoded as `Black = 1`, `White = 2`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Black = 1,
    White = 2,
}

impl Player {
    /// Numeric code of the player (1 or 2).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }

    /// The other player, i.e. `3 - code`.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn stone(self) -> Stone {
        match self {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::White => "white",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupancy of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// The owner of the stone, or `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Stone::Empty => None,
            Stone::Black => Some(Player::Black),
            Stone::White => Some(Player::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

impl From<Player> for Stone {
    fn from(player: Player) -> Self {
        player.stone()
    }
}

/// A dense `rows x cols` grid stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.cols + col
    }

    /// Cell at `point`, or `None` when out of bounds.
    pub fn get(&self, point: Point) -> Option<&T> {
        if point.0 >= self.rows || point.1 >= self.cols {
            return None;
        }
        self.cells.get(self.idx(point))
    }

    /// Cells of one row, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate over `(point, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        &self.cells[self.idx(point)]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, point: Point) -> &mut T {
        let i = self.idx(point);
        &mut self.cells[i]
    }
}

impl Grid<Stone> {
    /// Number of cells holding `player`'s stones.
    pub fn count(&self, player: Player) -> usize {
        let stone = player.stone();
        self.cells.iter().filter(|&&s| s == stone).count()
    }
}

impl fmt::Display for Grid<Stone> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = match self[(row, col)] {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Number of stones of each colour removed from the board so far.
///
/// `black` counts Black stones that were captured (by White), and vice versa.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Captures {
    pub black: u64,
    pub white: u64,
}

impl Captures {
    /// Stones of `player`'s colour that have been captured.
    pub fn lost_by(&self, player: Player) -> u64 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, player: Player, count: u64) {
        match player {
            Player::Black => self.black += count,
            Player::White => self.white += count,
        }
    }
}

/// One accepted placement in the move log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub point: Point,
    pub player: Player,
}
