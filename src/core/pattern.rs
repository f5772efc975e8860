use core::fmt;

/// Which axes are held constant inside every line of a family.
///
/// A set bit marks an axis whose value is constant within one line and differs
/// between the lines of the family. Clear bits are the line's direction: those axes
/// all advance together (0..side, possibly mirrored) along the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariationPattern {
    mask: u64,
    dimensions: usize,
}

impl VariationPattern {
    pub fn new(mask: u64, dimensions: usize) -> Self {
        debug_assert!(dimensions < 64 && mask >> dimensions == 0);
        VariationPattern { mask, dimensions }
    }

    /// Every pattern over `dimensions` axes, except the one with all bits set
    /// (it would only produce a single cell repeated `side` times)
    pub fn all(dimensions: usize) -> impl Iterator<Item = VariationPattern> {
        let full = (1u64 << dimensions) - 1;
        (0..full).map(move |mask| VariationPattern::new(mask, dimensions))
    }

    pub fn mask(&self) -> u64 {
        self.mask
    }

    pub fn varies(&self, axis: usize) -> bool {
        self.mask & (1 << axis) != 0
    }

    /// Number of axes that stay constant within a line
    pub fn num_varying(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Axes constant within a line, in ascending order. The position of an axis in
    /// this list is its rank in a combination of constant values.
    pub fn varying_axes(&self) -> Vec<usize> {
        (0..self.dimensions).filter(|&a| self.varies(a)).collect()
    }

    /// Direction axes of the lines, in ascending order
    pub fn fixed_axes(&self) -> Vec<usize> {
        (0..self.dimensions).filter(|&a| !self.varies(a)).collect()
    }

    /// For every axis, its rank among the varying axes (or `None` for direction axes)
    pub fn rank_map(&self) -> Vec<Option<usize>> {
        let mut rank = 0;
        (0..self.dimensions)
            .map(|axis| {
                if self.varies(axis) {
                    rank += 1;
                    Some(rank - 1)
                } else {
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for VariationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in 0..self.dimensions {
            write!(f, "{}", if self.varies(axis) { 'v' } else { '-' })?;
        }
        Ok(())
    }
}

/// All subsets of `axes` (including the empty one), as lists in ascending order
pub fn axis_subsets(axes: &[usize]) -> impl Iterator<Item = Vec<usize>> + '_ {
    (0..1u64 << axes.len()).map(move |choice| {
        axes.iter()
            .enumerate()
            .filter(|(i, _)| choice & (1 << i) != 0)
            .map(|(_, &axis)| axis)
            .collect()
    })
}
