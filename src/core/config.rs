use super::coord::Coord;
use super::error::{LineError, Result};

/// Patterns and reflection subsets are enumerated as bitmasks over the axes
pub const MAX_DIMENSIONS: usize = 63;

/// Shape of a hypercube board: `dimensions` axes, each of length `side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    dimensions: usize,
    side: usize,
}

impl BoardConfig {
    /// Validates the shape. Both values must be at least 1 and the board must be addressable.
    pub fn new(dimensions: usize, side: usize) -> Result<Self> {
        if dimensions < 1 {
            return Err(LineError::invalid_configuration(
                "the board needs at least one dimension",
            ));
        }
        if side < 1 {
            return Err(LineError::invalid_configuration(
                "the board side must be at least 1",
            ));
        }
        if dimensions > MAX_DIMENSIONS {
            return Err(LineError::invalid_configuration(format!(
                "{} dimensions requested, at most {} are supported",
                dimensions, MAX_DIMENSIONS
            )));
        }

        let config = BoardConfig { dimensions, side };
        if config.num_cells().is_none() {
            return Err(LineError::invalid_configuration(format!(
                "a board of side {} in {} dimensions has too many cells",
                side, dimensions
            )));
        }

        Ok(config)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells on the board, `None` if it does not fit in a usize
    pub fn num_cells(&self) -> Option<usize> {
        self.side.checked_pow(self.dimensions as u32)
    }

    /// Whether `coord` lies on this board
    pub fn contains(&self, coord: &Coord) -> bool {
        coord.dimensions() == self.dimensions && coord.values().iter().all(|&v| v < self.side)
    }
}

/// The 4x4x4x4 board
impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            dimensions: 4,
            side: 4,
        }
    }
}
