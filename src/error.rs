//! Failure types
//!
//! Every failure carries enough context (turn index, move pair, strategy
//! identities) for a caller to diagnose without internal instrumentation.
//! Nothing here is retried; all failures propagate upward immediately.

use thiserror::Error;

use crate::strategy::Move;
use crate::tournament::{ResultsTable, StrategyId};

/// A move pair the configured scoring rule has no entry for.
///
/// Signals a misconfigured (incomplete) matrix; not recoverable within a
/// game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no payoff configured for moves ({0:?}, {1:?})")]
pub struct LookupError(pub Move, pub Move);

/// Rejected [`ScoreMatrix`](crate::ScoreMatrix) construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The supplied entries do not cover every combination of the two moves.
    #[error("score matrix is missing entries for {missing:?}")]
    Incomplete { missing: Vec<(Move, Move)> },
}

/// A game that could not run to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Move resolution failed mid-game. Partial totals are discarded; an
    /// aborted game has no result.
    #[error("game aborted at turn {turn}: {source}")]
    Aborted {
        /// Zero-based index of the turn that failed.
        turn: u32,
        #[source]
        source: LookupError,
    },
}

/// A tournament that could not produce a full results table.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Two entrants share an id. The results table is keyed by identity, so
    /// this would silently overwrite games; rejected before any game runs.
    #[error("duplicate strategy id `{0}`")]
    IdentityCollision(StrategyId),

    /// One pairing's game aborted. `completed` holds the result of every
    /// pairing that finished before the failure, so completed work is not
    /// lost.
    #[error("game `{first}` vs `{second}` failed: {source}")]
    PairingFailed {
        first: StrategyId,
        second: StrategyId,
        completed: ResultsTable,
        #[source]
        source: GameError,
    },
}
