//! Core game logic: grid storage with anchored line detection, move
//! addressing strategies, symbols and the board state machine.

mod addressing;
mod grid;
mod state;
mod symbol;

pub use addressing::{Addressing, FreePlacement, GravityDrop};
pub use grid::Grid;
pub use state::{Board, ConnectFour, GameStatus, TicTacToe};
pub use symbol::Symbol;
