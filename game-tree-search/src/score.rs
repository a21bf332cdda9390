use std::{cmp::Reverse, fmt::Debug};

#[derive(Debug, Clone, PartialOrd, Ord, PartialEq, Eq, Copy, Hash)]
/// A ready made score type for [crate::Player] implementations. This wraps the score of your
/// evaluation function with the outcome of the game, so that wins are better than any score and
/// losses are worse than any score.
///
/// ```rust
/// use std::cmp::Reverse;
/// use game_tree_search::WrappedScore;
///
/// type Score = WrappedScore<i32>;
///
/// assert!(Score::Lose(3) < Score::Lose(5));
/// assert!(Score::Lose(5) < Score::Tie(1));
/// assert!(Score::Tie(1) < Score::Scored(-1_000_000));
/// assert!(Score::Scored(1_000_000) < Score::Win(Reverse(9)));
/// assert!(Score::Win(Reverse(9)) < Score::Win(Reverse(2)));
/// ```
pub enum WrappedScore<ScoreType>
where
    ScoreType: PartialOrd + Ord + Debug + Clone,
{
    /// We lost, the depth is recorded because we prefer surviving longer
    Lose(i64),
    /// We tied, the depth is recorded because we prefer reaching the tie later
    Tie(i64),
    /// We order this based on the score provided by the evaluation function
    Scored(ScoreType),
    /// We won, the depth is recorded because we prefer winning sooner
    Win(Reverse<i64>),
}

impl<ScoreType> WrappedScore<ScoreType>
where
    ScoreType: PartialOrd + Ord + Debug + Clone,
{
    /// Returns the best possible score
    ///
    /// This is a Win with the depth set as the minimum i64 such that no WrappedScore can be higher
    /// than this given the Ord
    pub fn best_possible_score() -> Self {
        WrappedScore::Win(Reverse(i64::MIN))
    }

    /// Returns the worst possible score
    ///
    /// This is a Lose with the depth set as the minimum i64 such that no WrappedScore can be lower
    /// than this given the Ord
    pub fn worst_possible_score() -> Self {
        WrappedScore::Lose(i64::MIN)
    }

    /// Returns the depth from this score IFF the score is a terminal node. Otherwise returns None
    pub fn terminal_depth(&self) -> Option<i64> {
        match &self {
            Self::Win(Reverse(d)) => Some(*d),
            Self::Tie(d) | Self::Lose(d) => Some(*d),
            Self::Scored(_) => None,
        }
    }

    /// Whether this score comes from a finished game rather than the evaluation function
    pub fn is_terminal(&self) -> bool {
        self.terminal_depth().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_bracket_everything() {
        let best = WrappedScore::<i64>::best_possible_score();
        let worst = WrappedScore::<i64>::worst_possible_score();

        for score in [
            WrappedScore::Lose(0),
            WrappedScore::Tie(i64::MAX),
            WrappedScore::Scored(i64::MIN),
            WrappedScore::Scored(i64::MAX),
            WrappedScore::Win(Reverse(i64::MAX)),
        ] {
            assert!(worst <= score);
            assert!(score <= best);
        }
    }

    #[test]
    fn test_terminal_depth() {
        assert_eq!(WrappedScore::<i32>::Win(Reverse(4)).terminal_depth(), Some(4));
        assert_eq!(WrappedScore::<i32>::Tie(6).terminal_depth(), Some(6));
        assert_eq!(WrappedScore::<i32>::Lose(2).terminal_depth(), Some(2));
        assert_eq!(WrappedScore::Scored(10).terminal_depth(), None);
        assert!(!WrappedScore::Scored(10).is_terminal());
    }
}
