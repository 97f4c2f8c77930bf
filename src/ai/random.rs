use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::{playable_moves, Agent};
use crate::error::EngineError;
use crate::game::{Addressing, Board};

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniformly random legal move.
pub fn random_move<A: Addressing, R: Rng>(
    board: &Board<A>,
    rng: &mut R,
) -> Result<usize, EngineError> {
    let moves = playable_moves(board)?;
    Ok(moves[rng.random_range(0..moves.len())])
}

impl<A: Addressing> Agent<A> for RandomAgent {
    fn select_move(&mut self, board: &Board<A>) -> Result<usize, EngineError> {
        random_move(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ConnectFour, FreePlacement, TicTacToe};

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::seeded(1);
        let mut board = TicTacToe::new(3, 3, 3).unwrap();
        board.apply_move(4).unwrap();
        let legal = board.legal_moves();

        for _ in 0..100 {
            let token = agent.select_move(&board).unwrap();
            assert!(legal.contains(&token), "Move {} is not legal", token);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::seeded(1);
        let mut agent2 = RandomAgent::seeded(2);
        let mut board = ConnectFour::new(6, 7, 4).unwrap();

        let mut turn = 0;
        while !board.is_terminal() {
            let token = if turn % 2 == 0 {
                agent1.select_move(&board).unwrap()
            } else {
                agent2.select_move(&board).unwrap()
            };
            board.apply_move(token).unwrap();
            turn += 1;
        }

        assert!(board.is_terminal());
        assert_eq!(board.move_count(), turn);
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = TicTacToe::new(4, 4, 3).unwrap();
        let mut a = RandomAgent::seeded(99);
        let mut b = RandomAgent::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn test_terminal_board_rejected() {
        let mut board = TicTacToe::new(1, 1, 1).unwrap();
        board.apply_move(0).unwrap();
        let mut agent = RandomAgent::seeded(0);
        assert_eq!(agent.select_move(&board), Err(EngineError::GameAlreadyOver));
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(Agent::<FreePlacement>::name(&agent), "Random");
    }
}
