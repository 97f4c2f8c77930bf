//! Flat Monte-Carlo move selection: random playouts from each root move,
//! ranked by mean outcome. No tree is kept below the root.

use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::error::EngineError;
use crate::game::{Addressing, Board, GameStatus, Symbol};

/// How long the sampler may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutBudget {
    /// Wall-clock window, checked between playouts.
    Time(Duration),
    /// Fixed number of playouts.
    Iterations(u32),
}

impl PlayoutBudget {
    fn exhausted(&self, start: Instant, iterations: u32) -> bool {
        match *self {
            PlayoutBudget::Time(limit) => start.elapsed() >= limit,
            PlayoutBudget::Iterations(limit) => iterations >= limit,
        }
    }
}

/// Accumulated playout results for one root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveStats {
    pub token: usize,
    pub plays: u32,
    /// Sum of outcomes: +1 win, -1 loss, 0 draw for the root mover.
    pub total: i64,
}

impl MoveStats {
    fn new(token: usize) -> Self {
        MoveStats {
            token,
            plays: 0,
            total: 0,
        }
    }

    /// Mean outcome, `None` when the move was never sampled.
    pub fn mean(&self) -> Option<f64> {
        (self.plays > 0).then(|| self.total as f64 / self.plays as f64)
    }
}

/// Outcome of a finished game for `perspective`.
fn outcome_for(status: GameStatus, perspective: Symbol) -> i64 {
    match status.winner() {
        Some(winner) if winner == perspective => 1,
        Some(_) => -1,
        None => 0,
    }
}

fn pick<R: Rng>(moves: &[usize], rng: &mut R) -> Option<usize> {
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

/// Play uniformly random moves until the game ends and return the final
/// status.
pub fn random_playout<A: Addressing, R: Rng>(board: &mut Board<A>, rng: &mut R) -> GameStatus {
    while !board.is_terminal() {
        let Some(token) = pick(&board.legal_moves(), rng) else {
            break;
        };
        if board.apply_move(token).is_err() {
            break;
        }
    }
    board.status()
}

/// Sample random playouts from the root moves until the budget runs out.
/// At least one playout is always run. The returned stats follow legal move
/// order.
pub fn sample_moves<A: Addressing, R: Rng>(
    board: &Board<A>,
    budget: PlayoutBudget,
    rng: &mut R,
) -> Result<Vec<MoveStats>, EngineError> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }
    if board.is_terminal() {
        return Err(EngineError::GameAlreadyOver);
    }

    let perspective = board.next_symbol();
    let mut stats: Vec<MoveStats> = moves.iter().copied().map(MoveStats::new).collect();
    let start = Instant::now();
    let mut iterations = 0u32;

    loop {
        if iterations > 0 && budget.exhausted(start, iterations) {
            break;
        }
        let slot = rng.random_range(0..moves.len());
        let mut sim = board.clone();
        if sim.apply_move(moves[slot]).is_ok() {
            let status = random_playout(&mut sim, rng);
            stats[slot].plays += 1;
            stats[slot].total += outcome_for(status, perspective);
        }
        iterations += 1;
    }

    debug!(
        "ran {} playouts over {} moves in {:?}",
        iterations,
        moves.len(),
        start.elapsed()
    );
    Ok(stats)
}

/// Pick the move with the best mean playout outcome. Ties keep the first
/// move in legal order; if no move was sampled the first legal move is used.
pub fn best_move_by_playout<A: Addressing, R: Rng>(
    board: &Board<A>,
    budget: PlayoutBudget,
    rng: &mut R,
) -> Result<usize, EngineError> {
    let stats = sample_moves(board, budget, rng)?;
    let best = rank(&stats);
    debug!(
        "monte-carlo picked {} (mean {:.3})",
        stats[best].token,
        stats[best].mean().unwrap_or(0.0)
    );
    Ok(stats[best].token)
}

/// Index of the move with the highest mean outcome. Unsampled moves rank
/// below every sampled one; ties keep the earlier entry. Falls back to the
/// first entry when nothing was sampled.
fn rank(stats: &[MoveStats]) -> usize {
    let mut best = 0;
    let mut best_mean = f64::NEG_INFINITY;
    for (i, s) in stats.iter().enumerate() {
        trace!("move {}: {} plays, total {}", s.token, s.plays, s.total);
        if let Some(mean) = s.mean() {
            if mean > best_mean {
                best_mean = mean;
                best = i;
            }
        }
    }
    best
}

/// Monte-Carlo agent with its own seedable generator.
pub struct PlayoutAgent {
    budget: PlayoutBudget,
    rng: StdRng,
}

impl PlayoutAgent {
    pub fn new(budget: PlayoutBudget) -> Self {
        PlayoutAgent {
            budget,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(budget: PlayoutBudget, seed: u64) -> Self {
        PlayoutAgent {
            budget,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn budget(&self) -> PlayoutBudget {
        self.budget
    }
}

impl<A: Addressing> Agent<A> for PlayoutAgent {
    fn select_move(&mut self, board: &Board<A>) -> Result<usize, EngineError> {
        best_move_by_playout(board, self.budget, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Monte-Carlo"
    }
}
