//! Round-robin tournament execution

use std::collections::{BTreeMap, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;
use crate::game::run_game;
use crate::payoff::Payoff;
use crate::strategy::Strategy;
use crate::Score;

/// Identifies one entrant; results tables and leaderboards are keyed by it.
pub type StrategyId = String;

/// Final totals of one game, ordered like the pairing that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairResult {
    pub score_a: Score,
    pub score_b: Score,
}

/// Every ordered pairing's outcome, self-pairings included.
///
/// A tournament over N entrants fills all N² keys.
pub type ResultsTable = BTreeMap<(StrategyId, StrategyId), PairResult>;

/// A tournament entrant: an id plus a factory that builds a fresh strategy
/// instance for every game it plays.
///
/// The factory is what lets stateful strategies enter a tournament: each of
/// an entrant's 2N games (including both sides of its self-pairing) gets its
/// own instance, so no state crosses games.
pub struct Entrant {
    id: StrategyId,
    factory: Box<dyn Fn() -> Box<dyn Strategy>>,
}

impl Entrant {
    pub fn new<F>(id: impl Into<StrategyId>, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Strategy> + 'static,
    {
        Self {
            id: id.into(),
            factory: Box::new(factory),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        (self.factory)()
    }
}

/// Run every ordered pairing of `entrants`, self-pairings included, for
/// `num_turns` turns each.
///
/// `(A, B)` and `(B, A)` are distinct games — move order matters under an
/// asymmetric payoff rule — so N entrants produce N² table entries. Games are
/// independent and run sequentially in entrant order; each gets fresh
/// strategy instances, so two runs over deterministic strategies produce
/// identical tables.
///
/// Duplicate ids are rejected up front with
/// [`TournamentError::IdentityCollision`]. If a game aborts, the error names
/// the pairing and carries every previously completed result.
pub fn run_tournament(
    entrants: &[Entrant],
    scores: &dyn Payoff,
    num_turns: u32,
) -> Result<ResultsTable, TournamentError> {
    let mut seen = HashSet::new();
    for entrant in entrants {
        if !seen.insert(entrant.id.as_str()) {
            return Err(TournamentError::IdentityCollision(entrant.id.clone()));
        }
    }

    let mut results = ResultsTable::new();
    for first in entrants {
        for second in entrants {
            debug!("pairing `{}` vs `{}` over {num_turns} turns", first.id, second.id);
            let mut strategy_a = first.spawn();
            let mut strategy_b = second.spawn();
            match run_game(strategy_a.as_mut(), strategy_b.as_mut(), scores, num_turns) {
                Ok((score_a, score_b)) => {
                    results.insert(
                        (first.id.clone(), second.id.clone()),
                        PairResult { score_a, score_b },
                    );
                }
                Err(source) => {
                    return Err(TournamentError::PairingFailed {
                        first: first.id.clone(),
                        second: second.id.clone(),
                        completed: results,
                        source,
                    });
                }
            }
        }
    }
    Ok(results)
}
