use std::fmt;

use super::{Addressing, FreePlacement, GravityDrop, Grid, Symbol};
use crate::error::{BoardError, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The winning symbol, if any
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::XWins => Some(Symbol::X),
            GameStatus::OWins => Some(Symbol::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    fn won_by(symbol: Symbol) -> GameStatus {
        match symbol {
            Symbol::X => GameStatus::XWins,
            Symbol::O => GameStatus::OWins,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::InProgress => "In progress",
            GameStatus::XWins => "X wins",
            GameStatus::OWins => "O wins",
            GameStatus::Draw => "Draw",
        })
    }
}

/// Complete state of one game: grid, move counter and status.
///
/// Cloning yields a fully independent copy, which is how the engines explore
/// hypothetical continuations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<A: Addressing = FreePlacement> {
    grid: Grid,
    win_length: usize,
    move_count: usize,
    status: GameStatus,
    addressing: A,
}

/// Free placement on any empty cell.
pub type TicTacToe = Board<FreePlacement>;

/// Gravity drop into columns.
pub type ConnectFour = Board<GravityDrop>;

impl<A: Addressing> Board<A> {
    /// Create an empty board. Only zero-sized parameters are rejected; whether
    /// the game is winnable at all is checked by the configuration layer.
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Result<Self, ConfigError> {
        Self::with_addressing(rows, columns, win_length, A::default())
    }

    pub fn with_addressing(
        rows: usize,
        columns: usize,
        win_length: usize,
        addressing: A,
    ) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 || win_length == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows,
                columns,
                win_length,
            });
        }
        Ok(Board {
            grid: Grid::new(rows, columns),
            win_length,
            move_count: 0,
            status: GameStatus::InProgress,
            addressing,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells (rows * columns)
    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn addressing(&self) -> &A {
        &self.addressing
    }

    /// Symbol that plays next: X on even move counts, O on odd.
    pub fn next_symbol(&self) -> Symbol {
        Symbol::for_move(self.move_count)
    }

    /// Occupant of a flat cell index.
    pub fn symbol_at(&self, cell: usize) -> Result<Option<Symbol>, BoardError> {
        self.grid.get(cell).ok_or(BoardError::OutOfRange {
            index: cell,
            len: self.grid.len(),
        })
    }

    /// Legal move tokens in ascending order: empty cells for free placement,
    /// non-full columns for gravity boards.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.addressing.legal_moves(&self.grid)
    }

    /// Play `token` for the side to move and update the status. A rejected
    /// move leaves the board untouched.
    pub fn apply_move(&mut self, token: usize) -> Result<GameStatus, BoardError> {
        if self.is_terminal() {
            return Err(BoardError::GameOver);
        }
        let cell = self.addressing.resolve(&self.grid, token)?;
        let mover = self.next_symbol();

        self.grid.set(cell, Some(mover));
        self.move_count += 1;

        // Check for win
        self.status = if self.grid.completes_line(cell, self.win_length) {
            GameStatus::won_by(mover)
        } else if self.move_count == self.grid.len() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        Ok(self.status)
    }

    /// Apply a move and return the new state (immutable)
    pub fn with_move(&self, token: usize) -> Result<Self, BoardError> {
        let mut next = self.clone();
        next.apply_move(token)?;
        Ok(next)
    }

    /// Take back the most recent move, which must have landed on `cell`.
    pub fn undo_move(&mut self, cell: usize) -> Result<(), BoardError> {
        let occupant = self.symbol_at(cell)?;
        let last_mover = match self.move_count {
            0 => return Err(BoardError::NotLastMove(cell)),
            n => Symbol::for_move(n - 1),
        };
        if occupant != Some(last_mover) || !self.addressing.can_lift(&self.grid, cell) {
            return Err(BoardError::NotLastMove(cell));
        }

        self.grid.set(cell, None);
        self.move_count -= 1;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Start over with an empty grid of the same shape.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.move_count = 0;
        self.status = GameStatus::InProgress;
    }
}
