use std::fmt::Debug;
use text_trees::StringTreeNode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The part of the game tree a search actually explored
///
/// This is only recorded when [crate::SearchOptions::record_tree] is set, since it keeps every
/// visited node alive until the search returns.
pub enum SearchTree<Action, ScoreType> {
    /// This is a non-leaf node in the game tree
    /// We have information about all the children we looked at as well as the chosen value
    Node {
        /// Whether this node was a maximizing node or not
        is_maximizing: bool,
        /// The chosen value
        value: ScoreType,
        /// Whether we stopped looking at children early because the value escaped the window
        pruned: bool,
        /// A 'recursive' look at all the moves under us, in the order they were explored
        /// Children skipped by pruning are not included
        children: Vec<(Action, Self)>,
    },
    /// Represents a node where the player's cutoff fired
    /// This happens when we reach a terminal state or the depth limit
    Leaf {
        #[allow(missing_docs)]
        value: ScoreType,
    },
}

impl<Action, ScoreType> SearchTree<Action, ScoreType>
where
    Action: Clone + Debug,
    ScoreType: Ord + Clone + Debug,
{
    /// Returns the value of this node
    pub fn value(&self) -> &ScoreType {
        match self {
            SearchTree::Node { value, .. } => value,
            SearchTree::Leaf { value } => value,
        }
    }

    /// The child the search settled on, which is the first explored child reaching our value
    pub fn chosen(&self) -> Option<&(Action, Self)> {
        match self {
            SearchTree::Leaf { .. } => None,
            SearchTree::Node {
                value, children, ..
            } => children.iter().find(|(_, child)| child.value() == value),
        }
    }

    /// Returns all the moves in the 'route' through the game tree that the search took
    /// This always matches the principal variation returned with the search
    pub fn chosen_route(&self) -> Vec<Action> {
        let mut route = vec![];
        let mut node = self;
        while let Some((action, child)) = node.chosen() {
            route.push(action.clone());
            node = child;
        }

        route
    }

    /// Number of nodes in the recorded tree, leaves included
    pub fn size(&self) -> usize {
        match self {
            SearchTree::Leaf { .. } => 1,
            SearchTree::Node { children, .. } => {
                1 + children.iter().map(|(_, child)| child.size()).sum::<usize>()
            }
        }
    }

    /// This returns a visual representation of the game tree that the search explored
    /// It shows the chosen value at each level, and marks nodes that were pruned
    pub fn to_text_tree(&self) -> String {
        format!("{}", self.to_text_tree_node("root".to_owned()))
    }

    fn to_text_tree_node(&self, label: String) -> StringTreeNode {
        match self {
            SearchTree::Leaf { value } => StringTreeNode::new(format!("{} = {:?}", label, value)),
            SearchTree::Node {
                is_maximizing,
                value,
                pruned,
                children,
            } => {
                let kind = if *is_maximizing { "max" } else { "min" };
                let pruned = if *pruned { " (pruned)" } else { "" };
                let mut node =
                    StringTreeNode::new(format!("{} {} = {:?}{}", label, kind, value, pruned));
                for (action, child) in children {
                    node.push_node(child.to_text_tree_node(format!("{:?}", action)));
                }

                node
            }
        }
    }
}
