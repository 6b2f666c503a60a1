//! `Board`: one arrangement of numbered tiles plus the blank (`0`).
//!
//! Boards are values. [`Board::apply_move`] returns a new board and leaves
//! the receiver untouched, because many search branches share one ancestor.
//!
//! # Equality semantics
//!
//! Two boards are equal iff their tile sequences are equal. The fingerprint
//! is a set key derived from the tiles; it is never compared in place of
//! equality for goal detection.

use crate::error::ConfigurationError;
use crate::proof::hash::{canonical_hash, Fingerprint};
use crate::proof::hash_domain::HashDomain;
use crate::puzzle::topology::{BoardTopology, Direction, Move};

/// A validated permutation of `0..N` laid out row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: Vec<u16>,
    /// Cached index of tile `0`.
    blank: usize,
}

impl Board {
    /// Validate `tiles` against `topology` and build a board.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::LengthMismatch`] if the tile count is not the
    ///   topology's cell count.
    /// - [`ConfigurationError::TileOutOfRange`] for the first value `>= N`.
    /// - [`ConfigurationError::DuplicateTile`] for the first repeated value.
    pub fn new(tiles: Vec<u16>, topology: &BoardTopology) -> Result<Self, ConfigurationError> {
        let cells = topology.cell_count();
        if tiles.len() != cells {
            return Err(ConfigurationError::LengthMismatch {
                expected: cells,
                actual: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        let mut blank = 0;
        for (index, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(ConfigurationError::TileOutOfRange {
                    value: usize::from(value),
                    cells,
                })?;
            if *slot {
                return Err(ConfigurationError::DuplicateTile { value });
            }
            *slot = true;
            if value == 0 {
                blank = index;
            }
        }

        Ok(Self { tiles, blank })
    }

    /// The solved arrangement: blank at index 0, tile `i` at index `i`.
    #[must_use]
    pub fn goal(topology: &BoardTopology) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let tiles = (0..topology.cell_count()).map(|v| v as u16).collect();
        Self { tiles, blank: 0 }
    }

    /// Row-major tile values.
    #[must_use]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false` for a validated board; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index holding `value`, if present.
    #[must_use]
    pub fn position_of(&self, value: u16) -> Option<usize> {
        if value == 0 {
            return Some(self.blank);
        }
        self.tiles.iter().position(|&t| t == value)
    }

    /// Index of the blank.
    #[must_use]
    pub const fn blank_position(&self) -> usize {
        self.blank
    }

    /// Blank moves available from this board, in tie-break order.
    #[must_use]
    pub fn legal_moves<'t>(&self, topology: &'t BoardTopology) -> &'t [Move] {
        topology.neighbors(self.blank)
    }

    /// Slide the tile at `target` into the blank at `blank`.
    ///
    /// Returns a new board; `self` is unchanged. `blank` must be this board's
    /// blank position and `target` one of its neighbours.
    #[must_use]
    pub fn apply_move(&self, blank: usize, target: usize) -> Self {
        debug_assert_eq!(
            blank, self.blank,
            "apply_move called with a stale blank index"
        );
        let mut tiles = self.tiles.clone();
        tiles[blank] = tiles[target];
        tiles[target] = 0;
        Self {
            tiles,
            blank: target,
        }
    }

    /// Move the blank one step in `direction`, if legal.
    #[must_use]
    pub fn apply_direction(&self, direction: Direction, topology: &BoardTopology) -> Option<Self> {
        topology
            .step(self.blank, direction)
            .map(|target| self.apply_move(self.blank, target))
    }

    /// Apply a whole move sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::IllegalMove`] naming the first move that
    /// would push the blank off the board.
    pub fn replay(
        &self,
        topology: &BoardTopology,
        moves: &[Direction],
    ) -> Result<Self, ConfigurationError> {
        moves
            .iter()
            .enumerate()
            .try_fold(self.clone(), |board, (step, &direction)| {
                board
                    .apply_direction(direction, topology)
                    .ok_or(ConfigurationError::IllegalMove { step, direction })
            })
    }

    /// Little-endian `u16` tile bytes; the fingerprint payload.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        self.tiles.iter().flat_map(|t| t.to_le_bytes()).collect()
    }

    /// Domain-separated SHA-256 of the tile sequence.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        canonical_hash(HashDomain::BoardIdentity, &self.identity_bytes())
    }

    /// Sum of Manhattan distances of every numbered tile from its goal cell.
    ///
    /// The blank is not counted, which keeps the estimate admissible and
    /// consistent under single-tile moves.
    #[must_use]
    pub fn heuristic(&self, topology: &BoardTopology) -> u32 {
        let total: usize = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(index, &value)| topology.manhattan(index, usize::from(value)))
            .sum();
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    /// `true` iff this is the identity arrangement.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &value)| usize::from(value) == index)
    }

    /// Whether the goal is reachable from this board.
    ///
    /// Every move is one transposition and shifts the blank by one cell, so
    /// the permutation parity and the parity of the blank's distance from its
    /// goal cell flip together. The goal has both even.
    #[must_use]
    pub fn is_solvable(&self, topology: &BoardTopology) -> bool {
        let blank_distance = topology.manhattan(self.blank, 0);
        self.permutation_is_odd() == (blank_distance % 2 == 1)
    }

    /// Parity via cycle decomposition: a `k`-cycle is `k - 1` transpositions.
    fn permutation_is_odd(&self) -> bool {
        let mut visited = vec![false; self.tiles.len()];
        let mut transpositions = 0usize;
        for start in 0..self.tiles.len() {
            let mut cursor = start;
            let mut length = 0usize;
            while !visited[cursor] {
                visited[cursor] = true;
                cursor = usize::from(self.tiles[cursor]);
                length += 1;
            }
            transpositions += length.saturating_sub(1);
        }
        transpositions % 2 == 1
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = (1..=self.tiles.len())
            .find(|s| s * s >= self.tiles.len())
            .unwrap_or(1);
        let width = self.tiles.len().saturating_sub(1).to_string().len();
        for (row_index, row) in self.tiles.chunks(side).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if *value == 0 {
                    write!(f, "{:>width$}", "_")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
