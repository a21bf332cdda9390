#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Counters collected while walking the tree
///
/// These are what make the effect of pruning observable: for the same tree the value never
/// changes, but [SearchStats::nodes_visited] goes down.
pub struct SearchStats {
    /// Nodes where `cutoff` returned false and successors were generated
    pub nodes_expanded: usize,
    /// Nodes where `cutoff` returned true and `evaluate` was called
    pub leaves_evaluated: usize,
    /// Times a maximizing node stopped early because its value reached beta
    pub beta_cutoffs: usize,
    /// Times a minimizing node stopped early because its value reached alpha
    pub alpha_cutoffs: usize,
    /// The deepest depth at which `cutoff` was consulted
    pub max_depth: usize,
}

impl SearchStats {
    /// Every node the search looked at, expanded or not
    pub fn nodes_visited(&self) -> usize {
        self.nodes_expanded + self.leaves_evaluated
    }

    /// Total number of pruning cutoffs, on either side of the window
    pub fn pruning_cutoffs(&self) -> usize {
        self.alpha_cutoffs + self.beta_cutoffs
    }

    pub(crate) fn reached(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}
