//! Game sessions: who sits in each seat, playing a game between two agents,
//! and win-count bookkeeping across replays.

use std::fmt;

use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{Addressing, Board, GameStatus, Symbol};

/// Who makes the moves for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer,
}

/// Seat assignment for X and O given the number of human players. With one
/// human, the human plays X and moves first.
pub fn seats_for(players: u8) -> [Seat; 2] {
    match players {
        0 => [Seat::Computer, Seat::Computer],
        1 => [Seat::Human, Seat::Computer],
        _ => [Seat::Human, Seat::Human],
    }
}

/// Seat that plays `symbol`.
pub fn seat_of(seats: &[Seat; 2], symbol: Symbol) -> Seat {
    match symbol {
        Symbol::X => seats[0],
        Symbol::O => seats[1],
    }
}

/// Win counts across the games of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWins => self.x_wins += 1,
            GameStatus::OWins => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==============================")?;
        writeln!(f, "Current game statistics:")?;
        writeln!(f, "Player 1 (X) wins: {}", self.x_wins)?;
        writeln!(f, "Player 2 (O) wins: {}", self.o_wins)?;
        writeln!(f, "Draws: {}", self.draws)?;
        write!(f, "==============================")
    }
}

/// Let an agent pick a move and apply it to the board.
pub fn agent_turn<A: Addressing>(
    board: &mut Board<A>,
    agent: &mut dyn Agent<A>,
) -> Result<usize, PlayError> {
    let token = agent.select_move(board).map_err(|source| PlayError::Engine {
        agent: agent.name().to_string(),
        source,
    })?;
    board
        .apply_move(token)
        .map_err(|_| PlayError::IllegalMove {
            agent: agent.name().to_string(),
            token,
            legal: board.legal_moves(),
        })?;
    Ok(token)
}

/// Play the board to completion with `x` and `o` choosing moves, returning
/// the final status.
pub fn play_game<A: Addressing>(
    board: &mut Board<A>,
    x: &mut dyn Agent<A>,
    o: &mut dyn Agent<A>,
) -> Result<GameStatus, PlayError> {
    while !board.is_terminal() {
        match board.next_symbol() {
            Symbol::X => agent_turn(board, x)?,
            Symbol::O => agent_turn(board, o)?,
        };
    }
    Ok(board.status())
}
