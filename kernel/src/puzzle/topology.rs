//! `BoardTopology`: the per-cell move table for one side length.
//!
//! Built once per puzzle size and shared read-only by every board and search
//! node. Neighbour lists are in the fixed order `Up, Down, Left, Right`
//! (restricted to the moves valid for the cell); that order is the child
//! generation tie-break for every strategy and must not change.

use std::str::FromStr;

use crate::error::ConfigurationError;

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in tie-break order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Report spelling (`"Up"`, `"Down"`, `"Left"`, `"Right"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown direction {s:?}"))
    }
}

/// One legal blank move out of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    /// Index the blank lands on.
    pub target: usize,
}

/// Move options and 1-based `(row, col)` of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTopology {
    pub neighbors: Vec<Move>,
    pub coordinate: (usize, usize),
}

/// Adjacency and coordinate tables for a `side x side` board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTopology {
    side: usize,
    cells: Vec<CellTopology>,
}

impl BoardTopology {
    /// Build the table for a board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::SideTooLarge`] if `side` is zero or the
    /// board would hold more tiles than a `u16` can number.
    pub fn new(side: usize) -> Result<Self, ConfigurationError> {
        let cell_count = side
            .checked_mul(side)
            .filter(|&n| n > 0 && n <= usize::from(u16::MAX) + 1)
            .ok_or(ConfigurationError::SideTooLarge { side })?;

        let cells = (0..cell_count)
            .map(|index| {
                let (row, col) = (index / side, index % side);
                let mut neighbors = Vec::with_capacity(4);
                if row > 0 {
                    neighbors.push(Move {
                        direction: Direction::Up,
                        target: index - side,
                    });
                }
                if row + 1 < side {
                    neighbors.push(Move {
                        direction: Direction::Down,
                        target: index + side,
                    });
                }
                if col > 0 {
                    neighbors.push(Move {
                        direction: Direction::Left,
                        target: index - 1,
                    });
                }
                if col + 1 < side {
                    neighbors.push(Move {
                        direction: Direction::Right,
                        target: index + 1,
                    });
                }
                CellTopology {
                    neighbors,
                    coordinate: (row + 1, col + 1),
                }
            })
            .collect();

        Ok(Self { side, cells })
    }

    /// Build the table for a board of `cells` tiles.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::EmptyBoard`] for zero cells,
    /// [`ConfigurationError::NotPerfectSquare`] when `cells` has no integer root.
    pub fn for_cell_count(cells: usize) -> Result<Self, ConfigurationError> {
        if cells == 0 {
            return Err(ConfigurationError::EmptyBoard);
        }
        let side = integer_sqrt(cells);
        if side * side != cells {
            return Err(ConfigurationError::NotPerfectSquare { cells });
        }
        Self::new(side)
    }

    /// Side length.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (`side * side`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Full record for one cell.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    #[must_use]
    pub fn cell(&self, index: usize) -> &CellTopology {
        &self.cells[index]
    }

    /// Legal blank moves out of `index`, in tie-break order.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[Move] {
        &self.cells[index].neighbors
    }

    /// 1-based `(row, col)` of `index`.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> (usize, usize) {
        self.cells[index].coordinate
    }

    /// Target of `direction` from `index`, if that move is legal.
    #[must_use]
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        self.neighbors(index)
            .iter()
            .find(|m| m.direction == direction)
            .map(|m| m.target)
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan(&self, a: usize, b: usize) -> usize {
        let (ra, ca) = self.coordinate(a);
        let (rb, cb) = self.coordinate(b);
        ra.abs_diff(rb) + ca.abs_diff(cb)
    }
}

fn integer_sqrt(n: usize) -> usize {
    // Float estimate, then correct for rounding at large n.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let mut root = (n as f64).sqrt() as usize;
    while !matches!(root.checked_mul(root), Some(square) if square <= n) {
        root -= 1;
    }
    while matches!((root + 1).checked_mul(root + 1), Some(square) if square <= n) {
        root += 1;
    }
    root
}
