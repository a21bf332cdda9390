use std::fmt::Debug;

use derivative::Derivative;
use tracing::{info_span, trace};

use crate::{Player, SearchError};

use super::{window::Bound, SearchResult, SearchStats, SearchTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Optional properties that can be defined for a [Searcher]
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use game_tree_search::SearchOptions;
///
/// let defaults: SearchOptions = Default::default();
///
/// assert!(defaults.prune);
/// assert!(!defaults.record_tree);
/// ```
pub struct SearchOptions {
    /// Whether to use Alpha-Beta pruning
    ///
    /// Turning this off gives plain minimax, which looks at every node but returns the same value
    ///
    /// Defaults to true
    pub prune: bool,
    /// Whether to keep the explored tree around in [SearchResult::tree]
    ///
    /// Defaults to false
    pub record_tree: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            prune: true,
            record_tree: false,
        }
    }
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
/// This is the struct that wraps a [Player] and can be used to run minimax
///
/// It also outputs traces using the [tracing] crate.
pub struct Searcher<PlayerType> {
    #[derivative(Debug = "ignore")]
    player: PlayerType,
    options: SearchOptions,
}

/// What one recursive call hands back to its parent
struct Explored<Action, ScoreType> {
    value: ScoreType,
    action: Option<Action>,
    /// The principal variation from this node, deepest move first
    line: Vec<Action>,
    tree: Option<SearchTree<Action, ScoreType>>,
}

/// Run a single minimax search from `state`, with Alpha-Beta pruning if `prune` is set
///
/// This is shorthand for a [Searcher] built with the default [SearchOptions] apart from `prune`.
pub fn search<P>(
    state: &P::State,
    player: &P,
    prune: bool,
) -> Result<SearchResult<P::Action, P::Score>, SearchError>
where
    P: Player,
    P::Action: Debug,
    P::Score: Debug,
{
    let options = SearchOptions {
        prune,
        ..Default::default()
    };

    Searcher::new(player, options).search(state)
}

impl<PlayerType> Searcher<PlayerType>
where
    PlayerType: Player,
    PlayerType::Action: Debug,
    PlayerType::Score: Debug,
{
    /// Construct a new `Searcher`
    pub fn new(player: PlayerType, options: SearchOptions) -> Self {
        Self { player, options }
    }

    /// The player this searcher asks about the game
    pub fn player(&self) -> &PlayerType {
        &self.player
    }

    /// The options this searcher runs with
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Search the tree under `state`, the root being a maximizing node at depth 0
    ///
    /// Fails only when the player breaks its contract, see [SearchError]
    pub fn search(
        &self,
        state: &PlayerType::State,
    ) -> Result<SearchResult<PlayerType::Action, PlayerType::Score>, SearchError> {
        info_span!(
            "game_tree_search",
            prune = self.options.prune,
            chosen_value = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
            line = tracing::field::Empty,
            nodes_visited = tracing::field::Empty,
            max_depth = tracing::field::Empty,
        )
        .in_scope(|| -> Result<_, SearchError> {
            let mut stats = SearchStats::default();
            let explored = self.minimax(
                state,
                Bound::NegInfinity,
                Bound::PosInfinity,
                0,
                true,
                &mut stats,
            )?;

            let mut line = explored.line;
            line.reverse();

            let result = SearchResult {
                value: explored.value,
                action: explored.action,
                line,
                stats,
                tree: explored.tree,
            };

            let current_span = tracing::Span::current();
            current_span.record("chosen_value", format!("{:?}", result.value).as_str());
            current_span.record("chosen_action", format!("{:?}", result.action).as_str());
            current_span.record("line", result.line_string().as_str());
            current_span.record("nodes_visited", result.stats.nodes_visited());
            current_span.record("max_depth", result.stats.max_depth);

            Ok(result)
        })
    }

    /// Pick the move to make from `state`
    ///
    /// This is `None` when the root itself is cut off, for example when the game is already over
    pub fn choose_action(
        &self,
        state: &PlayerType::State,
    ) -> Result<Option<PlayerType::Action>, SearchError> {
        Ok(self.search(state)?.action)
    }

    fn minimax(
        &self,
        node: &PlayerType::State,
        alpha: Bound<PlayerType::Score>,
        beta: Bound<PlayerType::Score>,
        depth: usize,
        is_maximizing: bool,
        stats: &mut SearchStats,
    ) -> Result<Explored<PlayerType::Action, PlayerType::Score>, SearchError> {
        let mut alpha = alpha;
        let mut beta = beta;

        stats.reached(depth);

        if self.player.cutoff(node, depth) {
            stats.leaves_evaluated += 1;
            let value = self.player.evaluate(node);
            let tree = self
                .options
                .record_tree
                .then(|| SearchTree::Leaf {
                    value: value.clone(),
                });

            return Ok(Explored {
                value,
                action: None,
                line: vec![],
                tree,
            });
        }

        stats.nodes_expanded += 1;

        let mut best: Option<(PlayerType::Score, PlayerType::Action, Vec<PlayerType::Action>)> =
            None;
        let mut children = vec![];
        let mut alpha_beta_cutoff = false;

        for (action, next_node) in self.player.successors(node) {
            let explored = self.minimax(
                &next_node,
                alpha.clone(),
                beta.clone(),
                depth + 1,
                !is_maximizing,
                stats,
            )?;

            if let Some(tree) = explored.tree {
                children.push((action.clone(), tree));
            }

            // Only a strict improvement replaces the current best, so ties go to the earlier move
            let improves = match &best {
                None => true,
                Some((best_value, _, _)) if is_maximizing => explored.value > *best_value,
                Some((best_value, _, _)) => explored.value < *best_value,
            };
            if !improves {
                continue;
            }

            let value = Bound::Finite(explored.value.clone());
            best = Some((explored.value, action, explored.line));

            if !self.options.prune {
                continue;
            }

            if is_maximizing {
                if value >= beta {
                    trace!(depth, ?value, "beta cutoff");
                    stats.beta_cutoffs += 1;
                    alpha_beta_cutoff = true;
                    break;
                }

                alpha = std::cmp::max(alpha, value);
            } else {
                if value <= alpha {
                    trace!(depth, ?value, "alpha cutoff");
                    stats.alpha_cutoffs += 1;
                    alpha_beta_cutoff = true;
                    break;
                }

                beta = std::cmp::min(beta, value);
            }
        }

        let Some((value, action, mut line)) = best else {
            return Err(SearchError::NoSuccessors { depth });
        };

        line.push(action.clone());

        let tree = self.options.record_tree.then(|| SearchTree::Node {
            is_maximizing,
            value: value.clone(),
            pruned: alpha_beta_cutoff,
            children,
        });

        Ok(Explored {
            value,
            action: Some(action),
            line,
            tree,
        })
    }
}
