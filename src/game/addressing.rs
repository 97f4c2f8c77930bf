//! Move addressing: how a player-facing move token maps onto a board cell.
//!
//! Both strategies feed the same anchored win check in [`Grid`]; they only
//! differ in which cell a token targets and which tokens are legal.

use std::fmt::Debug;

use super::Grid;
use crate::error::BoardError;

/// Translate move tokens into concrete cells and enumerate legal tokens.
pub trait Addressing: Clone + Debug + Default + Send + Sync {
    /// Short name of the game family, for display.
    fn name(&self) -> &'static str;

    /// Number of distinct move tokens on a grid (cells or columns).
    fn token_count(&self, grid: &Grid) -> usize;

    /// Resolve a token to the cell it would occupy, or reject it.
    fn resolve(&self, grid: &Grid, token: usize) -> Result<usize, BoardError>;

    /// Currently legal tokens, ascending.
    fn legal_moves(&self, grid: &Grid) -> Vec<usize>;

    /// Whether the occupied `cell` could be removed without leaving a hole
    /// that normal play cannot produce.
    fn can_lift(&self, _grid: &Grid, _cell: usize) -> bool {
        true
    }

    /// Whether tokens name columns that pieces fall down, rather than cells.
    fn drops_into_columns(&self) -> bool {
        false
    }
}

/// Tic-Tac-Toe style: a token names any empty cell by its flat index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreePlacement;

impl Addressing for FreePlacement {
    fn name(&self) -> &'static str {
        "Tic-Tac-Toe"
    }

    fn token_count(&self, grid: &Grid) -> usize {
        grid.len()
    }

    fn resolve(&self, grid: &Grid, token: usize) -> Result<usize, BoardError> {
        match grid.get(token) {
            None => Err(BoardError::OutOfRange {
                index: token,
                len: grid.len(),
            }),
            Some(Some(_)) => Err(BoardError::Occupied(token)),
            Some(None) => Ok(token),
        }
    }

    fn legal_moves(&self, grid: &Grid) -> Vec<usize> {
        grid.empty_cells().collect()
    }
}

/// Connect-Four style: a token names a column and the piece lands on the
/// lowest empty cell of that column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravityDrop;

impl Addressing for GravityDrop {
    fn name(&self) -> &'static str {
        "Connect Four"
    }

    fn token_count(&self, grid: &Grid) -> usize {
        grid.columns()
    }

    fn resolve(&self, grid: &Grid, token: usize) -> Result<usize, BoardError> {
        if token >= grid.columns() {
            return Err(BoardError::OutOfRange {
                index: token,
                len: grid.columns(),
            });
        }
        grid.landing_row(token)
            .map(|row| grid.index_of(row, token))
            .ok_or(BoardError::ColumnFull(token))
    }

    fn legal_moves(&self, grid: &Grid) -> Vec<usize> {
        (0..grid.columns())
            .filter(|&col| !grid.is_column_full(col))
            .collect()
    }

    fn can_lift(&self, grid: &Grid, cell: usize) -> bool {
        let (row, col) = grid.coords(cell);
        row == 0 || grid.at(row - 1, col).is_none()
    }

    fn drops_into_columns(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Symbol;

    #[test]
    fn test_free_placement_resolves_empty_cell() {
        let grid = Grid::new(3, 3);
        assert_eq!(FreePlacement.resolve(&grid, 4), Ok(4));
    }

    #[test]
    fn test_free_placement_rejects() {
        let mut grid = Grid::new(3, 3);
        grid.set(4, Some(Symbol::X));
        assert_eq!(FreePlacement.resolve(&grid, 4), Err(BoardError::Occupied(4)));
        assert_eq!(
            FreePlacement.resolve(&grid, 9),
            Err(BoardError::OutOfRange { index: 9, len: 9 })
        );
    }

    #[test]
    fn test_free_placement_legal_moves_ascending() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(FreePlacement.legal_moves(&grid), vec![0, 1, 2, 3]);
        grid.set(1, Some(Symbol::O));
        assert_eq!(FreePlacement.legal_moves(&grid), vec![0, 2, 3]);
    }

    #[test]
    fn test_gravity_resolves_to_bottom() {
        let mut grid = Grid::new(6, 7);
        assert_eq!(GravityDrop.resolve(&grid, 3), Ok(38));
        grid.set(38, Some(Symbol::X));
        assert_eq!(GravityDrop.resolve(&grid, 3), Ok(31));
    }

    #[test]
    fn test_gravity_rejects() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(
            GravityDrop.resolve(&grid, 2),
            Err(BoardError::OutOfRange { index: 2, len: 2 })
        );
        grid.set(2, Some(Symbol::X));
        grid.set(0, Some(Symbol::O));
        assert_eq!(GravityDrop.resolve(&grid, 0), Err(BoardError::ColumnFull(0)));
        assert_eq!(GravityDrop.legal_moves(&grid), vec![1]);
    }

    #[test]
    fn test_gravity_can_lift_only_top_piece() {
        let mut grid = Grid::new(3, 1);
        grid.set(2, Some(Symbol::X));
        grid.set(1, Some(Symbol::O));
        assert!(GravityDrop.can_lift(&grid, 1));
        assert!(!GravityDrop.can_lift(&grid, 2));
    }

    #[test]
    fn test_token_counts() {
        let grid = Grid::new(6, 7);
        assert_eq!(FreePlacement.token_count(&grid), 42);
        assert_eq!(GravityDrop.token_count(&grid), 7);
    }

    #[test]
    fn test_drops_into_columns() {
        assert!(!FreePlacement.drops_into_columns());
        assert!(GravityDrop.drops_into_columns());
    }
}
