//! Move selection for vantage: hashing, evaluation, ordering, and search.

pub mod config;
pub mod eval;
pub mod search;
pub mod zobrist;

pub use config::{ConfigError, DEFAULT_DEPTH, EngineConfig, MAX_DEPTH};
pub use eval::evaluate;
pub use search::ordering::{order_moves, score_move};
pub use search::tt::TranspositionCache;
pub use search::{Engine, INFINITE, SearchResult, SearchStats};
pub use zobrist::{Hasher, PendingUpdate, ZobristTable};
