//! Configuration errors surfaced before any search starts.
//!
//! An unsolvable puzzle is not an error: the engine reports it as a terminal
//! `Failure` status. Everything here is fatal and pre-flight.

use crate::puzzle::topology::Direction;

/// Typed failure for puzzle configuration and input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The board has no cells.
    EmptyBoard,
    /// The cell count has no integer square root.
    NotPerfectSquare { cells: usize },
    /// The side length is zero or its square does not fit the tile type.
    SideTooLarge { side: usize },
    /// Board length disagrees with the topology it is paired with.
    LengthMismatch { expected: usize, actual: usize },
    /// A tile value lies outside `0..cells`.
    TileOutOfRange { value: usize, cells: usize },
    /// A tile value appears more than once.
    DuplicateTile { value: u16 },
    /// A board token could not be parsed as a tile number.
    MalformedTile { token: String },
    /// The strategy selector is not one of the four recognised names.
    UnknownStrategy { name: String },
    /// A replayed move is not legal at the blank's position.
    IllegalMove { step: usize, direction: Direction },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board has no tiles"),
            Self::NotPerfectSquare { cells } => {
                write!(f, "board size {cells} is not a perfect square")
            }
            Self::SideTooLarge { side } => {
                write!(f, "side length {side} is outside the supported range")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "board has {actual} tiles, topology expects {expected}")
            }
            Self::TileOutOfRange { value, cells } => {
                write!(f, "tile {value} is outside 0..{cells}")
            }
            Self::DuplicateTile { value } => write!(f, "tile {value} appears more than once"),
            Self::MalformedTile { token } => write!(f, "malformed tile token {token:?}"),
            Self::UnknownStrategy { name } => write!(
                f,
                "unknown strategy {name:?} (expected bfs, dfs, ast or ida)"
            ),
            Self::IllegalMove { step, direction } => {
                write!(f, "move {step} ({direction}) is not legal from this board")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
