//! Solve request: raw CLI text validated into typed search inputs.
//!
//! All validation happens here, before an engine is constructed. A request
//! that parses is guaranteed to run; the only remaining outcomes are
//! success, failure (unsolvable) or an exhausted step budget.

use npuzzle_kernel::error::ConfigurationError;
use npuzzle_kernel::puzzle::board::Board;
use npuzzle_kernel::puzzle::topology::BoardTopology;
use npuzzle_search::strategy::Strategy;

/// Parse a comma-separated tile list such as `"1,2,5,3,4,0,6,7,8"`.
///
/// Whitespace around each token is ignored. Range and permutation checks
/// are left to [`Board::new`].
///
/// # Errors
///
/// Returns [`ConfigurationError::MalformedTile`] for the first token that
/// is empty or not a non-negative integer fitting a tile value, and
/// [`ConfigurationError::EmptyBoard`] for blank input.
pub fn parse_tiles(text: &str) -> Result<Vec<u16>, ConfigurationError> {
    if text.trim().is_empty() {
        return Err(ConfigurationError::EmptyBoard);
    }
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u16>()
                .map_err(|_| ConfigurationError::MalformedTile {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// A validated solve request.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub strategy: Strategy,
    pub topology: BoardTopology,
    pub initial: Board,
}

impl SolveRequest {
    /// Validate a strategy selector and a comma-separated board.
    ///
    /// The side length is derived from the tile count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for an unknown strategy, malformed
    /// tiles, a non-square tile count, or a tile list that is not a
    /// permutation of `0..N`.
    pub fn parse(method: &str, board: &str) -> Result<Self, ConfigurationError> {
        let strategy: Strategy = method.parse()?;
        let tiles = parse_tiles(board)?;
        let topology = BoardTopology::for_cell_count(tiles.len())?;
        let initial = Board::new(tiles, &topology)?;
        Ok(Self {
            strategy,
            topology,
            initial,
        })
    }

    /// Side length of the board.
    #[must_use]
    pub fn side(&self) -> usize {
        self.topology.side()
    }
}
