use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;
use super::{minimax, playout, random};
use crate::config::{AiConfig, Difficulty};
use crate::error::EngineError;
use crate::game::{Addressing, Board};

/// The automated opponent: exhaustive search on small boards, Monte-Carlo
/// playouts on everything else. One generator is shared by every random
/// decision it makes.
pub struct ComputerAgent {
    config: AiConfig,
    rng: StdRng,
}

impl ComputerAgent {
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        ComputerAgent { config, rng }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Switch Monte-Carlo to a wall-clock budget of `millis`. Any fixed
    /// playout count is dropped so the new time takes effect.
    pub fn set_think_time_ms(&mut self, millis: u64) {
        self.config.think_time_ms = millis;
        self.config.playout_iterations = None;
    }
}

impl<A: Addressing> Agent<A> for ComputerAgent {
    fn select_move(&mut self, board: &Board<A>) -> Result<usize, EngineError> {
        if self.config.searches(board.cell_count()) {
            match self.config.difficulty {
                Difficulty::Hard => minimax::best_move_by_search(board),
                Difficulty::Easy => random::random_move(board, &mut self.rng),
            }
        } else {
            debug!(
                "{} cells exceed search limit {}, sampling",
                board.cell_count(),
                self.config.search_cell_limit
            );
            playout::best_move_by_playout(board, self.config.budget(), &mut self.rng)
        }
    }

    fn name(&self) -> &str {
        "Computer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::PlayoutBudget;
    use crate::game::{ConnectFour, TicTacToe};
    use std::time::{Duration, Instant};

    fn seeded(difficulty: Difficulty) -> ComputerAgent {
        ComputerAgent::new(AiConfig {
            difficulty,
            playout_iterations: Some(200),
            seed: Some(17),
            ..AiConfig::default()
        })
    }

    #[test]
    fn hard_uses_search_on_small_board() {
        let mut board = TicTacToe::new(3, 3, 3).unwrap();
        for m in [0, 4, 1] {
            board.apply_move(m).unwrap();
        }
        let mut agent = seeded(Difficulty::Hard);
        // Only minimax is guaranteed to block at 2
        for _ in 0..5 {
            assert_eq!(agent.select_move(&board), Ok(2));
        }
    }

    #[test]
    fn easy_plays_legal_moves() {
        let board = TicTacToe::new(3, 3, 3).unwrap();
        let mut agent = seeded(Difficulty::Easy);
        for _ in 0..20 {
            let token = agent.select_move(&board).unwrap();
            assert!(token < 9);
        }
    }

    #[test]
    fn large_board_uses_playouts() {
        let board = ConnectFour::new(6, 7, 4).unwrap();
        let mut a = seeded(Difficulty::Hard);
        let mut b = seeded(Difficulty::Hard);
        let token = a.select_move(&board).unwrap();
        assert!(token < 7);
        // Same seed and iteration budget give the same choice
        assert_eq!(b.select_move(&board), Ok(token));
    }

    #[test]
    fn settings_can_change() {
        let mut agent = seeded(Difficulty::Hard);
        agent.set_difficulty(Difficulty::Easy);
        agent.set_think_time_ms(250);
        assert_eq!(agent.config().difficulty, Difficulty::Easy);
        assert_eq!(agent.config().think_time_ms, 250);
    }

    #[test]
    fn think_time_replaces_iteration_budget() {
        let mut agent = seeded(Difficulty::Hard);
        assert_eq!(agent.config().budget(), PlayoutBudget::Iterations(200));
        agent.set_think_time_ms(30);
        assert_eq!(agent.config().budget(), PlayoutBudget::Time(Duration::from_millis(30)));

        let board = ConnectFour::new(6, 7, 4).unwrap();
        let start = Instant::now();
        agent.select_move(&board).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
