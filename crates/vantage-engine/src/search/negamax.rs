//! Fail-hard alpha-beta negamax.

use tracing::trace;
use vantage_core::{Board, Move, Position};

use crate::evaluate;
use crate::search::ordering::order_moves;
use crate::search::tt::TranspositionCache;
use crate::zobrist::Hasher;

/// Score bound outside any reachable evaluation.
pub const INFINITE: i32 = 10_000_000;

/// Counters for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Leaf positions scored by the evaluator (cache misses).
    pub leaves: u64,
    /// Leaf positions answered from the cache.
    pub cache_hits: u64,
}

/// Mutable state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    pub hasher: &'a mut Hasher,
    pub cache: &'a mut TranspositionCache,
    pub stats: &'a mut SearchStats,
}

/// Search every root move with a full window and keep the first best one.
///
/// Returns `(None, 0)` when the side to move has no legal moves.
pub(super) fn search_root<B: Board>(
    board: &mut B,
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> Result<(Option<Move>, i32), B::Error> {
    let mut moves = board.legal_moves()?;
    if moves.is_empty() {
        return Ok((None, 0));
    }
    order_moves(&*board, &mut moves);

    let mut best_move = None;
    let mut best_score = -INFINITE;
    for mv in moves {
        make_move(board, mv, ctx)?;
        let child = alphabeta(board, depth.saturating_sub(1), -INFINITE, INFINITE, ctx);
        unmake_move(board, ctx)?;
        let score = -child?;

        trace!(mv = %mv, score, "root move searched");
        if best_move.is_none() || score > best_score {
            best_move = Some(mv);
            best_score = score;
        }
    }

    Ok((best_move, best_score))
}

/// Negamax alpha-beta search.
///
/// Returns the score of the position for the side to move, clamped to
/// `[alpha, beta]`. Board errors propagate after the move that was in flight
/// has been taken back.
pub(super) fn alphabeta<B: Board>(
    board: &mut B,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, B::Error> {
    if depth == 0 {
        return Ok(leaf_score(&*board, ctx));
    }

    let mut moves = board.legal_moves()?;
    if moves.is_empty() {
        return Ok(0);
    }
    order_moves(&*board, &mut moves);

    for mv in moves {
        make_move(board, mv, ctx)?;
        let child = alphabeta(board, depth - 1, -beta, -alpha, ctx);
        unmake_move(board, ctx)?;
        let score = -child?;

        if score >= beta {
            return Ok(beta);
        }
        if score > alpha {
            alpha = score;
        }
    }

    Ok(alpha)
}

/// Static score of a leaf, from the cache when the position was seen before.
fn leaf_score(position: &impl Position, ctx: &mut SearchContext<'_>) -> i32 {
    let key = ctx.hasher.key();
    if let Some(score) = ctx.cache.get(key) {
        ctx.stats.cache_hits += 1;
        return score;
    }

    let score = evaluate(position);
    ctx.cache.put(key, score);
    ctx.stats.leaves += 1;
    score
}

/// Apply `mv` to the board and the hasher together.
fn make_move<B: Board>(board: &mut B, mv: Move, ctx: &mut SearchContext<'_>) -> Result<(), B::Error> {
    let pending = ctx.hasher.prepare(&*board, mv);
    board.apply_move(mv)?;
    ctx.hasher.commit(pending, &*board);
    Ok(())
}

fn unmake_move<B: Board>(board: &mut B, ctx: &mut SearchContext<'_>) -> Result<(), B::Error> {
    board.undo_last()?;
    ctx.hasher.undo();
    Ok(())
}
