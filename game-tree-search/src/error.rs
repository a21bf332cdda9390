use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors surfaced by a search
///
/// The search is deterministic and exhaustive, so the only way it can fail is when the [crate::Player]
/// breaks its contract.
pub enum SearchError {
    /// `cutoff` returned false for a state that has no successors
    ///
    /// Every state without a legal continuation must be reported as a cutoff, otherwise there is no
    /// value we could honestly return for it.
    NoSuccessors {
        /// Depth of the offending state, the root being 0
        depth: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoSuccessors { depth } => write!(
                f,
                "state at depth {depth} has no successors but was not reported as a cutoff"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
