/// One side of the `(alpha, beta)` window
///
/// The infinities live outside of the player's score type, so every score a player can produce,
/// including its own win/loss sentinels, is strictly between them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Bound<ScoreType> {
    NegInfinity,
    Finite(ScoreType),
    PosInfinity,
}
