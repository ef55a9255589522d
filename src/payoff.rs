//! Payoff resolution for move pairs

use std::collections::HashMap;

use crate::error::{LookupError, MatrixError};
use crate::strategy::Move;
use crate::Score;

/// A scoring rule: maps an ordered pair of moves to an ordered pair of
/// scores.
///
/// The pair is ordered — `resolve(a, b)` and `resolve(b, a)` are distinct
/// lookups, since a rule is not assumed symmetric. [`ScoreMatrix`] is the
/// table-backed implementation; any `Fn(Move, Move) -> (Score, Score)`
/// closure works as a non-tabular rule.
pub trait Payoff {
    /// Score one turn. The result is `(score for first, score for second)`.
    fn resolve(&self, first: Move, second: Move) -> Result<(Score, Score), LookupError>;
}

impl<F> Payoff for F
where
    F: Fn(Move, Move) -> (Score, Score),
{
    fn resolve(&self, first: Move, second: Move) -> Result<(Score, Score), LookupError> {
        Ok(self(first, second))
    }
}

/// Table-backed payoff covering all four move combinations.
///
/// Coverage is validated eagerly at construction; a validated matrix never
/// fails to resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix {
    entries: HashMap<(Move, Move), (Score, Score)>,
}

impl ScoreMatrix {
    /// Build from the four ordered outcomes: both cooperate, first
    /// cooperates / second defects, first defects / second cooperates, both
    /// defect.
    pub fn new(
        cc: (Score, Score),
        cd: (Score, Score),
        dc: (Score, Score),
        dd: (Score, Score),
    ) -> Self {
        let entries = HashMap::from([
            ((Move::Cooperate, Move::Cooperate), cc),
            ((Move::Cooperate, Move::Defect), cd),
            ((Move::Defect, Move::Cooperate), dc),
            ((Move::Defect, Move::Defect), dd),
        ]);
        Self { entries }
    }

    /// Build from an explicit entry list.
    ///
    /// Fails unless every combination of the two moves is covered. When a
    /// pair appears more than once, the last entry wins.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ((Move, Move), (Score, Score))>,
    ) -> Result<Self, MatrixError> {
        let entries: HashMap<_, _> = entries.into_iter().collect();
        let missing: Vec<(Move, Move)> = Move::ALL
            .iter()
            .flat_map(|&a| Move::ALL.iter().map(move |&b| (a, b)))
            .filter(|pair| !entries.contains_key(pair))
            .collect();
        if missing.is_empty() {
            Ok(Self { entries })
        } else {
            Err(MatrixError::Incomplete { missing })
        }
    }

    /// The classic Axelrod payoffs: reward 3, sucker 0, temptation 5,
    /// punishment 1.
    pub fn classic() -> Self {
        Self::new((3, 3), (0, 5), (5, 0), (1, 1))
    }
}

impl Payoff for ScoreMatrix {
    fn resolve(&self, first: Move, second: Move) -> Result<(Score, Score), LookupError> {
        self.entries
            .get(&(first, second))
            .copied()
            .ok_or(LookupError(first, second))
    }
}
