use super::config::BoardConfig;
use core::fmt;

/// A cell of the board, one value per axis. Axis 0 is the most significant
/// (lexicographic order compares it first).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord(Vec<usize>);

impl Coord {
    pub fn new(values: Vec<usize>) -> Self {
        Coord(values)
    }

    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[usize] {
        &self.0
    }

    /// Mirrors the value along `axis`: v -> side - 1 - v
    pub fn reflect(&mut self, axis: usize, side: usize) {
        self.0[axis] = side - 1 - self.0[axis];
    }

    /// Bitmask of the axes where `self` and `other` differ
    pub fn differing_axes(&self, other: &Coord) -> u64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .fold(0, |mask, (axis, _)| mask | (1 << axis))
    }

    /// Row-major position of the cell in a board of the given side
    pub fn flat_index(&self, side: usize) -> usize {
        self.0.iter().fold(0, |index, &v| index * side + v)
    }

    /// Inverse of `flat_index`
    pub fn from_flat_index(mut index: usize, config: &BoardConfig) -> Self {
        let mut values = vec![0; config.dimensions()];
        for value in values.iter_mut().rev() {
            *value = index % config.side();
            index /= config.side();
        }
        Coord(values)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}
