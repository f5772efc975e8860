use crate::core::config::BoardConfig;
use crate::core::coord::Coord;
use crate::core::error::Result;
use crate::core::line::{Line, LineSet};
use crate::core::pattern::{axis_subsets, VariationPattern};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Returns every distinct winning line of a `dimensions`-dimensional board of the given side
pub fn enumerate_lines(dimensions: usize, side: usize) -> Result<LineSet> {
    let config = BoardConfig::new(dimensions, side)?;
    Ok(hypercube_lines(&config))
}

/// Returns every distinct winning line of the board, each one in canonical (sorted) form
pub fn hypercube_lines(config: &BoardConfig) -> LineSet {
    let patterns: Vec<VariationPattern> = VariationPattern::all(config.dimensions()).collect();

    // patterns are independent, merge them by set union
    let lines = patterns
        .into_par_iter()
        .map(|pattern| pattern_lines(config, &pattern))
        .reduce(LineSet::new, |mut acc, lines| {
            acc.extend(lines);
            acc
        });

    info!(
        dimensions = config.dimensions(),
        side = config.side(),
        lines = lines.len(),
        "enumerated winning lines"
    );

    lines
}

/// Lines whose constant axes are the ones set in `pattern`, with every reflection
/// across the direction axes folded in
pub fn pattern_lines(config: &BoardConfig, pattern: &VariationPattern) -> BTreeSet<Line> {
    let family = line_family(config, pattern);
    let direction_axes = pattern.fixed_axes();

    let mut folded = BTreeSet::new();
    for reflect_axes in axis_subsets(&direction_axes) {
        for line in &family {
            folded.insert(line.reflected(&reflect_axes, config.side()).canonical());
        }
    }

    debug!(
        pattern = %pattern,
        family = family.len(),
        lines = folded.len(),
        "folded reflections"
    );

    folded
}

/// One line per combination of values of the constant axes. Along the line, every
/// direction axis takes the index t of the cell.
fn line_family(config: &BoardConfig, pattern: &VariationPattern) -> Vec<Line> {
    let side = config.side();
    let ranks = pattern.rank_map();
    let k = pattern.num_varying();

    (0..side.pow(k as u32))
        .map(|combination| {
            let values = combination_values(combination, k, side);
            let cells = (0..side)
                .map(|t| {
                    Coord::new(
                        ranks
                            .iter()
                            .map(|rank| match rank {
                                Some(r) => values[*r],
                                None => t,
                            })
                            .collect(),
                    )
                })
                .collect();
            Line::new(cells)
        })
        .collect()
}

/// Digits of `combination` in base `side`, most significant first
fn combination_values(mut combination: usize, k: usize, side: usize) -> Vec<usize> {
    let mut values = vec![0; k];
    for value in values.iter_mut().rev() {
        *value = combination % side;
        combination /= side;
    }
    values
}

/// Number of winning lines without enumerating them.
///
/// A line advances along a non-empty set of j axes, each forward or backward (up to
/// reversing the whole line), with the other axes at any of `side` values:
/// sum over j of C(d, j) * side^(d-j) * 2^(j-1) = ((side+2)^d - side^d) / 2.
/// On a board of side 1 all of those collapse into the single cell.
pub fn expected_line_count(config: &BoardConfig) -> Option<u128> {
    if config.side() == 1 {
        return Some(1);
    }

    let d = config.dimensions() as u32;
    let side = config.side() as u128;
    let total = (side + 2).checked_pow(d)?;
    let inner = side.checked_pow(d)?;
    Some((total - inner) / 2)
}
