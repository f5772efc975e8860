use super::config::BoardConfig;
use super::coord::Coord;
use std::collections::BTreeSet;

/// A winning line: `side` cells advancing together along the direction axes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(Vec<Coord>);

/// Deduplicated set of canonical lines. Ordered, so iteration is reproducible.
pub type LineSet = BTreeSet<Line>;

impl Line {
    /// Wraps cells in traversal order
    pub fn new(cells: Vec<Coord>) -> Self {
        Line(cells)
    }

    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorts the cells lexicographically. Both traversal directions of a line (and
    /// reflections that land on the same cells) end up equal.
    pub fn canonical(mut self) -> Self {
        self.0.sort();
        self
    }

    pub fn is_canonical(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// A copy with every cell mirrored along each of `axes`
    pub fn reflected(&self, axes: &[usize], side: usize) -> Self {
        Line(
            self.0
                .iter()
                .map(|cell| {
                    let mut cell = cell.clone();
                    for &axis in axes {
                        cell.reflect(axis, side);
                    }
                    cell
                })
                .collect(),
        )
    }

    /// Bitmask of the axes along which the line advances, if every pair of cells
    /// differs on exactly the same axes. `None` for lines that are not collinear.
    pub fn direction(&self) -> Option<u64> {
        let first = self.0.first()?;
        let direction = self.0.get(1).map_or(0, |second| first.differing_axes(second));

        for (i, a) in self.0.iter().enumerate() {
            for b in &self.0[i + 1..] {
                if a.differing_axes(b) != direction {
                    return None;
                }
            }
        }

        Some(direction)
    }

    /// A line is valid for a board if it has `side` distinct cells on the board and
    /// they are collinear
    pub fn is_valid(&self, config: &BoardConfig) -> bool {
        if self.len() != config.side() || !self.0.iter().all(|c| config.contains(c)) {
            return false;
        }

        let distinct: BTreeSet<&Coord> = self.0.iter().collect();
        if distinct.len() != self.len() {
            return false;
        }

        match self.direction() {
            Some(0) => config.side() == 1,
            Some(_) => true,
            None => false,
        }
    }
}
