//! Iterated Prisoner's Dilemma engine
//!
//! Simulates two-player iterated games between pluggable strategies and
//! reduces a full round-robin of pairwise results into per-strategy
//! leaderboard metrics.
//!
//! The three entry points mirror the data flow:
//! - [`run_game`] plays one game turn by turn and returns final totals,
//! - [`run_tournament`] plays every ordered pairing of an entrant list
//!   (self-pairings included) and collects a [`ResultsTable`],
//! - [`aggregate`] reduces that table into a [`Leaderboard`].
//!
//! ```
//! use dilemma::{aggregate, run_tournament, AlwaysDefect, Entrant, ScoreMatrix, TitForTat};
//!
//! let entrants = vec![
//!     Entrant::new("tit_for_tat", || Box::new(TitForTat)),
//!     Entrant::new("always_defect", || Box::new(AlwaysDefect)),
//! ];
//! let table = run_tournament(&entrants, &ScoreMatrix::classic(), 200)?;
//! let board = aggregate(&table);
//! assert_eq!(board.wins_for("always_defect"), 2);
//! # Ok::<(), dilemma::TournamentError>(())
//! ```

mod error;
mod game;
mod leaderboard;
mod payoff;
mod strategy;
mod tournament;

pub use error::{GameError, LookupError, MatrixError, TournamentError};
pub use game::{run_game, run_game_recorded, GameRecord, Turn, TurnRecord};
pub use leaderboard::{aggregate, Leaderboard};
pub use payoff::{Payoff, ScoreMatrix};
pub use strategy::{
    AlwaysCooperate, AlwaysDefect, Gradual, GrimTrigger, Move, Pavlov, Random, Strategy,
    SuspiciousTitForTat, TitForTat, TitForTwoTats,
};
pub use tournament::{run_tournament, Entrant, PairResult, ResultsTable, StrategyId};

/// Payoff for one turn, or an accumulated total of such payoffs.
///
/// Signed; the configured score matrix determines the actual range.
pub type Score = i64;
