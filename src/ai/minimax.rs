//! Exhaustive minimax search with alpha-beta pruning, written in negamax
//! form with a transposition table. Scores are always from the perspective
//! of the side to move at the node being evaluated.

use std::collections::HashMap;

use log::debug;

use super::agent::{playable_moves, Agent};
use crate::error::EngineError;
use crate::game::{Addressing, Board, GameStatus, Grid};

const INF: i32 = i32::MAX;

/// Base of the depth-weighted win score: a win found `d` plies below the root
/// scores `win_score - d`. Never below 10, and large enough that any win
/// outranks a draw on the given board.
pub fn win_score<A: Addressing>(board: &Board<A>) -> i32 {
    let cells = i32::try_from(board.cell_count()).unwrap_or(INF - 1);
    cells.saturating_add(1).max(10)
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: usize,
    /// Score of `best_move` for the side to move at the root.
    pub score: i32,
    /// Number of positions visited, root excluded.
    pub nodes: u64,
}

/// How a cached score relates to the true value of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exact,
    /// True value is at least the stored score (beta cutoff)
    Lower,
    /// True value is at most the stored score (fail-low)
    Upper,
}

/// State shared across one root search. Positions are keyed by their grid;
/// within a single search the grid fixes the ply, so depth-weighted scores
/// can be reused across transpositions.
struct Search {
    win: i32,
    nodes: u64,
    table: HashMap<Grid, (i32, Bound)>,
}

/// Find the optimal move for the side to move, assuming optimal replies.
/// Ties keep the first move in ascending order.
pub fn search<A: Addressing>(board: &Board<A>) -> Result<SearchResult, EngineError> {
    let moves = playable_moves(board)?;
    let mut ctx = Search {
        win: win_score(board),
        nodes: 0,
        table: HashMap::new(),
    };

    let mut alpha = -INF;
    let mut best = SearchResult {
        best_move: moves[0],
        score: -INF,
        nodes: 0,
    };

    for token in moves {
        let Ok(child) = board.with_move(token) else {
            continue;
        };
        let score = -negamax(&child, 1, -INF, -alpha, &mut ctx);
        if score > best.score {
            best.score = score;
            best.best_move = token;
        }
        alpha = alpha.max(score);
    }

    best.nodes = ctx.nodes;
    debug!(
        "minimax picked {} (score {}, {} nodes, {} cached)",
        best.best_move,
        best.score,
        best.nodes,
        ctx.table.len()
    );
    Ok(best)
}

/// Convenience wrapper returning only the move.
pub fn best_move_by_search<A: Addressing>(board: &Board<A>) -> Result<usize, EngineError> {
    search(board).map(|result| result.best_move)
}

fn negamax<A: Addressing>(
    board: &Board<A>,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut Search,
) -> i32 {
    ctx.nodes += 1;

    match board.status() {
        GameStatus::Draw => return 0,
        // The previous mover completed a line, so the side to move has lost
        GameStatus::XWins | GameStatus::OWins => return depth - ctx.win,
        GameStatus::InProgress => {}
    }

    if let Some(&(score, bound)) = ctx.table.get(board.grid()) {
        match bound {
            Bound::Exact => return score,
            Bound::Lower => alpha = alpha.max(score),
            Bound::Upper => beta = beta.min(score),
        }
        if alpha >= beta {
            return score;
        }
    }

    let alpha_orig = alpha;
    let mut best = -INF;
    for token in board.legal_moves() {
        let Ok(child) = board.with_move(token) else {
            continue;
        };
        let score = -negamax(&child, depth + 1, -beta, -alpha, ctx);
        best = best.max(score);
        alpha = alpha.max(score);
        if beta <= alpha {
            break;
        }
    }

    debug_assert!(best > -INF, "in-progress board without legal moves");
    let bound = if best <= alpha_orig {
        Bound::Upper
    } else if best >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.table.insert(board.grid().clone(), (best, bound));
    best
}

/// Plays the minimax-optimal move every turn.
#[derive(Debug, Clone, Default)]
pub struct SearchAgent;

impl SearchAgent {
    pub fn new() -> Self {
        SearchAgent
    }
}

impl<A: Addressing> Agent<A> for SearchAgent {
    fn select_move(&mut self, board: &Board<A>) -> Result<usize, EngineError> {
        best_move_by_search(board)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
