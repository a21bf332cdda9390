#![deny(missing_debug_implementations, missing_docs)]
//! This crate implements minimax, with optional alpha-beta pruning, for two-player games. You
//! provide a [Player] that knows how to expand a position, when to stop expanding, and how to
//! score a position with anything that implements the `Ord` trait.
//!
//! The search itself never looks inside your states or actions. It only walks the tree the
//! [Player] describes and compares the values it gets back.

mod error;
pub use error::SearchError;

mod player;
pub use player::{DepthLimited, Player};

mod score;
pub use score::WrappedScore;

pub mod alpha_beta;
pub use alpha_beta::{search, SearchOptions, SearchResult, SearchStats, SearchTree, Searcher};
