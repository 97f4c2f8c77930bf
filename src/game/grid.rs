use super::Symbol;

/// Axis directions as (row step, column step), checked in this order:
/// horizontal, vertical, main diagonal (\), anti-diagonal (/).
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Row-major cell storage. Row 0 is the top row, index = row * columns + col.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Symbol>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupant of a flat index, `None` when the index is outside the grid.
    pub fn get(&self, index: usize) -> Option<Option<Symbol>> {
        self.cells.get(index).copied()
    }

    /// Occupant at (row, col). Callers guarantee the coordinates are in range.
    pub fn at(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells[row * self.columns + col]
    }

    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    pub(crate) fn set(&mut self, index: usize, symbol: Option<Symbol>) {
        self.cells[index] = symbol;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    /// Flat indices of all empty cells, ascending
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// A column is full when its top cell is occupied
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.columns || self.cells[col].is_some()
    }

    /// Lowest empty row in a column, if any
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.columns {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.at(row, col).is_none())
    }

    /// Check whether the symbol at `index` is part of a run of at least
    /// `win_length` along any axis. Only cells on the four lines through the
    /// anchor are inspected.
    pub fn completes_line(&self, index: usize, win_length: usize) -> bool {
        let Some(symbol) = self.get(index).flatten() else {
            return false;
        };
        let (row, col) = self.coords(index);

        AXES.iter().any(|&(dr, dc)| {
            let run = 1
                + self.run_length(row, col, dr, dc, symbol)
                + self.run_length(row, col, -dr, -dc, symbol);
            run >= win_length
        })
    }

    /// Count consecutive `symbol` cells from (row, col) in one direction,
    /// excluding the starting cell.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, symbol: Symbol) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.rows
            && (c as usize) < self.columns
            && self.at(r as usize, c as usize) == Some(symbol)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}
