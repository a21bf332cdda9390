use std::{fs, marker::PhantomData, path::Path};

use color_eyre::eyre::{eyre, Result, WrapErr};
use game_tree_search::{DepthLimited, Player, SearchOptions, SearchResult, Searcher};
use serde::Deserialize;
use tracing::{debug, info};

/// A game tree loaded from disk
///
/// ```json
/// { "depth_limit": 1, "root": { "children": [{ "action": "a", "node": { "value": 3 } }] } }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TreeFile {
    #[serde(default)]
    pub depth_limit: Option<usize>,
    pub root: Node,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Node {
    /// `value` is only needed when a depth limit cuts this node off
    Inner {
        children: Vec<Edge>,
        #[serde(default)]
        value: Option<i64>,
    },
    Leaf { value: i64 },
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Edge {
    pub action: String,
    pub node: Node,
}

impl TreeFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("Could not read {}", path.display()))?;
        serde_json::from_str(&contents)
            .wrap_err_with(|| format!("{} is not a valid game tree", path.display()))
    }

    /// Search the tree, `depth_limit` taking precedence over the limit in the file
    pub fn search(
        &self,
        options: SearchOptions,
        depth_limit: Option<usize>,
    ) -> Result<SearchResult<String, i64>> {
        let depth_limit = depth_limit.or(self.depth_limit);
        self.root.check_values(depth_limit, 0)?;

        let root = &self.root;
        let walker = TreeWalker::default();
        let result = match depth_limit {
            Some(limit) => {
                let searcher = Searcher::new(DepthLimited::new(walker, limit), options);
                debug!(
                    max_depth = searcher.player().max_depth(),
                    prune = searcher.options().prune,
                    "searching with a depth limit"
                );
                searcher.search(&root)?
            }
            None => Searcher::new(walker, options).search(&root)?,
        };

        Ok(result)
    }

    /// Run plain minimax and alpha-beta over the tree and check they agree
    pub fn compare(&self, depth_limit: Option<usize>) -> Result<Comparison> {
        let full = self.search(
            SearchOptions {
                prune: false,
                record_tree: false,
            },
            depth_limit,
        )?;
        let pruned = self.search(
            SearchOptions {
                prune: true,
                record_tree: false,
            },
            depth_limit,
        )?;

        info!(
            full_nodes = full.stats.nodes_visited(),
            pruned_nodes = pruned.stats.nodes_visited(),
            "finished both searches"
        );

        Comparison::new(full, pruned)
    }
}

/// The same tree searched with and without pruning
#[derive(Debug)]
pub(crate) struct Comparison {
    pub full: SearchResult<String, i64>,
    pub pruned: SearchResult<String, i64>,
}

impl Comparison {
    /// Fails when the two searches disagree on the value of the root
    pub fn new(full: SearchResult<String, i64>, pruned: SearchResult<String, i64>) -> Result<Self> {
        if full.value != pruned.value {
            return Err(eyre!(
                "Minimax found {} but alpha-beta found {}",
                full.value,
                pruned.value
            ));
        }

        Ok(Self { full, pruned })
    }

    /// Both searches can tie on value while settling on different moves
    pub fn moves_differ(&self) -> bool {
        self.full.action != self.pruned.action
    }
}

impl Node {
    fn children(&self) -> &[Edge] {
        match self {
            Node::Inner { children, .. } => children,
            Node::Leaf { .. } => &[],
        }
    }

    /// Every node the depth limit cuts off must carry a value to evaluate
    fn check_values(&self, depth_limit: Option<usize>, depth: usize) -> Result<()> {
        match self {
            Node::Leaf { .. } => Ok(()),
            Node::Inner { value, .. } if depth_limit.is_some_and(|l| depth >= l) => match value {
                Some(_) => Ok(()),
                None => Err(eyre!(
                    "Inner node at depth {depth} is cut off by the depth limit but has no value"
                )),
            },
            Node::Inner { children, .. } => children
                .iter()
                .try_for_each(|edge| edge.node.check_values(depth_limit, depth + 1)),
        }
    }

    /// Number of nodes in the tree, the root included
    pub fn size(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|edge| edge.node.size())
            .sum::<usize>()
    }
}

/// Plays a [TreeFile] by walking it, the leaves being the terminal positions
///
/// States are borrowed nodes, so expanding a node never copies the subtree under it
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TreeWalker<'t> {
    _tree: PhantomData<&'t Node>,
}

impl<'t> Player for TreeWalker<'t> {
    type State = &'t Node;
    type Action = String;
    type Score = i64;

    fn successors(&self, state: &&'t Node) -> impl Iterator<Item = (String, &'t Node)> {
        let node: &'t Node = *state;
        node.children()
            .iter()
            .map(|edge| (edge.action.clone(), &edge.node))
    }

    fn cutoff(&self, state: &&'t Node, _depth: usize) -> bool {
        matches!(state, Node::Leaf { .. })
    }

    fn evaluate(&self, state: &&'t Node) -> i64 {
        match state {
            Node::Leaf { value } => *value,
            Node::Inner { value, .. } => value.unwrap_or_default(),
        }
    }
}
