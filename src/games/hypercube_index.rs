use crate::core::config::BoardConfig;
use crate::core::coord::Coord;
use crate::core::line::{Line, LineSet};
use fixedbitset::FixedBitSet;

/// Lookup tables over a set of winning lines.
///
/// Lines are numbered in the order of the `LineSet`. Cells are addressed by their
/// row-major flat index (see `Coord::flat_index`).
pub struct LineIndex {
    config: BoardConfig,
    lines: Vec<Line>,
    /// line ids passing through each cell
    cell_lines: Vec<Vec<usize>>,
    /// cells of each line
    line_cells: Vec<FixedBitSet>,
}

impl LineIndex {
    pub fn build(config: &BoardConfig, lines: &LineSet) -> Self {
        // BoardConfig guarantees the board is addressable
        let num_cells = config.num_cells().unwrap_or(0);
        let mut cell_lines = vec![Vec::new(); num_cells];
        let mut line_cells = Vec::with_capacity(lines.len());

        for (id, line) in lines.iter().enumerate() {
            let mut bitset = FixedBitSet::with_capacity(num_cells);
            for cell in line.cells() {
                let index = cell.flat_index(config.side());
                bitset.insert(index);
                cell_lines[index].push(id);
            }
            line_cells.push(bitset);
        }

        LineIndex {
            config: *config,
            lines: lines.iter().cloned().collect(),
            cell_lines,
            line_cells,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn num_cells(&self) -> usize {
        self.cell_lines.len()
    }

    /// Ids of the lines that contain `cell`, `None` if the cell is not on the board
    pub fn lines_through(&self, cell: &Coord) -> Option<&[usize]> {
        if !self.config.contains(cell) {
            return None;
        }
        self.lines_through_index(cell.flat_index(self.config.side()))
    }

    /// Same as `lines_through`, by flat cell index
    pub fn lines_through_index(&self, index: usize) -> Option<&[usize]> {
        self.cell_lines.get(index).map(Vec::as_slice)
    }

    /// Cells of the line `id`, as a bitset over flat cell indexes
    pub fn cells_of(&self, id: usize) -> Option<&FixedBitSet> {
        self.line_cells.get(id)
    }

    /// Union of the cells of every line through `cell` (the cell itself included)
    pub fn neighbourhood(&self, cell: &Coord) -> Option<FixedBitSet> {
        let mut cells = FixedBitSet::with_capacity(self.num_cells());
        for &id in self.lines_through(cell)? {
            cells.union_with(&self.line_cells[id]);
        }
        Some(cells)
    }
}
