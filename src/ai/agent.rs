use crate::error::EngineError;
use crate::game::{Addressing, Board};

/// Universal interface for automated players.
pub trait Agent<A: Addressing> {
    /// Pick a move token for the side to move. The board is only read; any
    /// exploration happens on copies.
    fn select_move(&mut self, board: &Board<A>) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Legal moves of a board that is still being played.
pub(crate) fn playable_moves<A: Addressing>(board: &Board<A>) -> Result<Vec<usize>, EngineError> {
    if board.is_terminal() {
        return Err(EngineError::GameAlreadyOver);
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }
    Ok(moves)
}
