use std::fmt::Debug;

use itertools::Itertools;

use super::{SearchStats, SearchTree};

#[derive(Debug, Clone, PartialEq, Eq)]
/// This is returned from a search
/// It contains the chosen value and move, and the line of play that leads to that value
pub struct SearchResult<Action, ScoreType> {
    /// The minimax value of the root
    pub value: ScoreType,
    /// The move to make from the root
    ///
    /// This is `None` only when the root itself was cut off
    pub action: Option<Action>,
    /// The principal variation, starting with [SearchResult::action]
    ///
    /// It is empty when the root was cut off, and otherwise runs until the node where the cutoff
    /// fired along the chosen line
    pub line: Vec<Action>,
    /// What the search had to look at to find this result
    pub stats: SearchStats,
    /// The explored tree, if [crate::SearchOptions::record_tree] was set
    pub tree: Option<SearchTree<Action, ScoreType>>,
}

impl<Action, ScoreType> SearchResult<Action, ScoreType>
where
    Action: Debug,
{
    /// The `(value, action, line)` triple, without the bookkeeping
    pub fn into_parts(self) -> (ScoreType, Option<Action>, Vec<Action>) {
        (self.value, self.action, self.line)
    }

    /// The principal variation as a single space separated string, useful for logging
    pub fn line_string(&self) -> String {
        self.line.iter().map(|a| format!("{:?}", a)).join(" ")
    }
}
