//! Search driver, move ordering, and the transposition cache.

pub mod negamax;
pub mod ordering;
pub mod tt;

use tracing::{debug, warn};
use vantage_core::{Board, Move, Position};

use crate::config::EngineConfig;
use crate::zobrist::{Hasher, ZobristTable};
use negamax::{SearchContext, alphabeta, search_root};
use tt::TranspositionCache;

pub use negamax::{INFINITE, SearchStats};

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, or `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    /// Score of `best_move` in centipawns for the side to move.
    pub score: i32,
    /// Depth searched, in plies.
    pub depth: u8,
    /// Leaf positions scored by the evaluator.
    pub leaves: u64,
    /// Leaf positions answered from the transposition cache.
    pub cache_hits: u64,
}

/// Fixed-depth alpha-beta searcher.
///
/// Owns the Zobrist keys, the running position hash, and a transposition
/// cache that persists across searches until [`reset`](Engine::reset).
pub struct Engine {
    config: EngineConfig,
    hasher: Hasher,
    cache: TranspositionCache,
    stats: SearchStats,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let table = match config.seed {
            Some(seed) => ZobristTable::with_seed(seed),
            None => ZobristTable::new(),
        };
        Self {
            config,
            hasher: Hasher::new(table),
            cache: TranspositionCache::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Zobrist hash of `position` under this engine's keys.
    pub fn fingerprint(&self, position: &impl Position) -> u64 {
        self.hasher.table().hash_position(position)
    }

    /// Forget cached scores and counters. The Zobrist keys are kept.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.stats = SearchStats::default();
        debug!("engine reset");
    }

    /// Search to the configured depth.
    pub fn search<B: Board>(&mut self, board: &mut B) -> Result<SearchResult, B::Error> {
        self.get_best_move(board, self.config.depth)
    }

    /// Search `depth` plies and return the best root move.
    ///
    /// Ties keep the first move in search order. A depth of 0 is searched
    /// as 1. The board is left as it was found, and board errors are
    /// returned unchanged.
    pub fn get_best_move<B: Board>(
        &mut self,
        board: &mut B,
        depth: u8,
    ) -> Result<SearchResult, B::Error> {
        let depth = if depth == 0 {
            warn!("search depth 0 requested, searching 1 ply");
            1
        } else {
            depth
        };

        self.stats = SearchStats::default();
        self.hasher.reset(&*board);
        debug!(depth, key = self.hasher.key(), "search started");

        let mut ctx = SearchContext {
            hasher: &mut self.hasher,
            cache: &mut self.cache,
            stats: &mut self.stats,
        };
        let (best_move, score) = search_root(board, depth, &mut ctx)?;

        let result = SearchResult {
            best_move,
            score,
            depth,
            leaves: self.stats.leaves,
            cache_hits: self.stats.cache_hits,
        };
        debug!(
            best_move = ?result.best_move,
            score,
            leaves = result.leaves,
            cache_hits = result.cache_hits,
            cached = self.cache.len(),
            "search finished"
        );
        Ok(result)
    }

    /// Score `board` for the side to move with an `[alpha, beta]` window.
    ///
    /// At depth 0 this is the (possibly cached) static evaluation. Counters
    /// accumulate into [`stats`](Engine::stats) without being reset.
    pub fn alphabeta<B: Board>(
        &mut self,
        board: &mut B,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, B::Error> {
        self.hasher.reset(&*board);
        let mut ctx = SearchContext {
            hasher: &mut self.hasher,
            cache: &mut self.cache,
            stats: &mut self.stats,
        };
        alphabeta(board, depth, alpha, beta, &mut ctx)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("cached", &self.cache.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use vantage_core::{Board, CastleRights, Color, Mailbox, Move, Piece, Position, Square};

    use super::*;

    /// A position with no legal moves.
    struct Terminal(Mailbox);

    impl Position for Terminal {
        fn piece_at(&self, square: Square) -> Option<Piece> {
            self.0.piece_at(square)
        }
        fn side_to_move(&self) -> Color {
            self.0.side_to_move()
        }
        fn castling_rights(&self) -> CastleRights {
            self.0.castling_rights()
        }
        fn en_passant(&self) -> Option<Square> {
            self.0.en_passant()
        }
    }

    impl Board for Terminal {
        type Error = Infallible;

        fn legal_moves(&self) -> Result<Vec<Move>, Infallible> {
            Ok(Vec::new())
        }
        fn apply_move(&mut self, _mv: Move) -> Result<(), Infallible> {
            unreachable!("terminal positions have no moves")
        }
        fn undo_last(&mut self) -> Result<(), Infallible> {
            unreachable!("terminal positions have no moves")
        }
    }

    fn engine() -> Engine {
        Engine::new(EngineConfig::default().with_seed(1))
    }

    #[test]
    fn no_moves_scores_zero_without_a_move() {
        let mut board = Terminal(Mailbox::starting_position());
        let result = engine().get_best_move(&mut board, 3).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
        assert_eq!(result.leaves, 0);
    }

    #[test]
    fn depth_zero_is_searched_as_one() {
        let mut board = Terminal(Mailbox::starting_position());
        let result = engine().get_best_move(&mut board, 0).unwrap();
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn search_uses_configured_depth() {
        let mut engine = Engine::new(EngineConfig::new(7).unwrap().with_seed(1));
        let mut board = Terminal(Mailbox::starting_position());
        assert_eq!(engine.search(&mut board).unwrap().depth, 7);
    }

    #[test]
    fn leaf_is_static_evaluation_then_cached() {
        let fen = "4k3/8/8/8/4P3/8/8/4K3 w - - 0 1";
        let mut board = Terminal(fen.parse().unwrap());
        let mut engine = engine();

        let score = engine.alphabeta(&mut board, 0, -INFINITE, INFINITE).unwrap();
        assert_eq!(score, crate::evaluate(&board));
        assert_eq!(engine.stats().leaves, 1);
        assert_eq!(engine.cache().get(engine.fingerprint(&board)), Some(score));

        let again = engine.alphabeta(&mut board, 0, -INFINITE, INFINITE).unwrap();
        assert_eq!(again, score);
        assert_eq!(engine.stats().cache_hits, 1);

        engine.reset();
        assert!(engine.cache().is_empty());
        assert_eq!(engine.stats(), SearchStats::default());
    }

    #[test]
    fn seeded_engines_agree_on_fingerprints() {
        let board = Mailbox::starting_position();
        assert_eq!(engine().fingerprint(&board), engine().fingerprint(&board));
    }
}
