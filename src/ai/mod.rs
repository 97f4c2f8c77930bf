//! Automated players: the agent trait, exhaustive minimax search, flat
//! Monte-Carlo sampling, a random player and the engine-selecting computer.

mod agent;
pub mod computer;
pub mod minimax;
pub mod playout;
mod random;

pub use agent::Agent;
pub use computer::ComputerAgent;
pub use minimax::{best_move_by_search, search, SearchAgent, SearchResult};
pub use playout::{best_move_by_playout, random_playout, PlayoutAgent, PlayoutBudget};
pub use random::{random_move, RandomAgent};
