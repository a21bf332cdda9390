/// The capability the search needs from a game
///
/// Implement this for your agent. The search is generic over it and never inspects the concrete
/// type, states or actions.
///
/// Contract:
/// - `successors` yields owned states that are independent copies. Mutating one of them must never
///   be observable from a sibling or from the parent.
/// - `successors` has a deterministic order. Ties are broken in favour of the earlier successor, so
///   the order is part of the result.
/// - `cutoff` must return true for every state that has no successors. If it doesn't the search
///   fails with [crate::SearchError::NoSuccessors].
/// - `cutoff` must eventually return true along every path. The search imposes no depth limit of
///   its own, see [DepthLimited] if you need one.
pub trait Player {
    /// A position in the game
    type State;
    /// The label of a move leading from one state to the next
    type Action: Clone;
    /// The value of a position, from the point of view of the maximizing player
    type Score: Ord + Clone;

    /// All the `(action, next_state)` pairs reachable from `state`, in a fixed order
    fn successors(&self, state: &Self::State) -> impl Iterator<Item = (Self::Action, Self::State)>;

    /// Whether to stop expanding `state`, which sits `depth` plies below the root
    fn cutoff(&self, state: &Self::State, depth: usize) -> bool;

    /// Static value of `state`. Only called where [Player::cutoff] returned true
    fn evaluate(&self, state: &Self::State) -> Self::Score;
}

impl<P> Player for &P
where
    P: Player,
{
    type State = P::State;
    type Action = P::Action;
    type Score = P::Score;

    fn successors(&self, state: &Self::State) -> impl Iterator<Item = (Self::Action, Self::State)> {
        (**self).successors(state)
    }

    fn cutoff(&self, state: &Self::State, depth: usize) -> bool {
        (**self).cutoff(state, depth)
    }

    fn evaluate(&self, state: &Self::State) -> Self::Score {
        (**self).evaluate(state)
    }
}

#[derive(Debug, Clone, Copy)]
/// Wraps a [Player] and additionally cuts the search off at a fixed depth
///
/// The inner player is still asked first, so terminal positions are detected as usual.
pub struct DepthLimited<P> {
    inner: P,
    max_depth: usize,
}

impl<P> DepthLimited<P> {
    /// Stop expanding once `max_depth` plies below the root are reached
    pub fn new(inner: P, max_depth: usize) -> Self {
        Self { inner, max_depth }
    }

    /// The depth at which nodes are no longer expanded
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<P> Player for DepthLimited<P>
where
    P: Player,
{
    type State = P::State;
    type Action = P::Action;
    type Score = P::Score;

    fn successors(&self, state: &Self::State) -> impl Iterator<Item = (Self::Action, Self::State)> {
        self.inner.successors(state)
    }

    fn cutoff(&self, state: &Self::State, depth: usize) -> bool {
        self.inner.cutoff(state, depth) || depth >= self.max_depth
    }

    fn evaluate(&self, state: &Self::State) -> Self::Score {
        self.inner.evaluate(state)
    }
}
