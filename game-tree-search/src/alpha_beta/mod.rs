//! Two-player minimax, with optional Alpha-Beta pruning.
//!
//! The root is always a maximizing node and the levels alternate from there. Every value is
//! scored from the point of view of the maximizing player, so when propagating values up the tree
//! we choose the highest value at maximizing nodes and the lowest value at minimizing nodes.
//!
//! Pruning never changes the value of the search, only how many nodes we have to look at to find
//! it. When several moves tie for the best value the first one in successor order is chosen, so
//! with pruning enabled the chosen move and line can only differ from plain minimax among moves
//! that tie.
//!
//! ```rust
//! use game_tree_search::{search, Player};
//!
//! // A tiny game: the maximizer picks a row, the minimizer then picks a column
//! struct Matrix([[i32; 2]; 2]);
//!
//! #[derive(Debug, Clone, Copy)]
//! enum Pick {
//!     Start,
//!     Row(usize),
//!     Cell(usize, usize),
//! }
//!
//! impl Player for Matrix {
//!     type State = Pick;
//!     type Action = usize;
//!     type Score = i32;
//!
//!     fn successors(&self, state: &Pick) -> impl Iterator<Item = (usize, Pick)> {
//!         let state = *state;
//!         (0..2).map(move |i| match state {
//!             Pick::Start => (i, Pick::Row(i)),
//!             Pick::Row(r) => (i, Pick::Cell(r, i)),
//!             Pick::Cell(..) => unreachable!("cells are cut off"),
//!         })
//!     }
//!
//!     fn cutoff(&self, state: &Pick, _depth: usize) -> bool {
//!         matches!(state, Pick::Cell(..))
//!     }
//!
//!     fn evaluate(&self, state: &Pick) -> i32 {
//!         match state {
//!             Pick::Cell(r, c) => self.0[*r][*c],
//!             _ => 0,
//!         }
//!     }
//! }
//!
//! let game = Matrix([[3, 4], [5, 6]]);
//! let result = search(&Pick::Start, &game, true).unwrap();
//!
//! assert_eq!(result.value, 5);
//! assert_eq!(result.action, Some(1));
//! assert_eq!(result.line, vec![1, 0]);
//! ```

mod eval;
pub use eval::{search, SearchOptions, Searcher};

mod search_return;
pub use search_return::SearchResult;

mod stats;
pub use stats::SearchStats;

mod tree;
pub use tree::SearchTree;

mod window;
