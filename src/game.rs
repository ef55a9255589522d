//! Game execution engine

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::payoff::Payoff;
use crate::strategy::{Move, Strategy};
use crate::Score;

/// One completed turn as seen by one player.
///
/// Histories are built from these, so a strategy sees both moves and both
/// realized scores for every past turn of its game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub my_move: Move,
    pub their_move: Move,
    pub my_score: Score,
    pub their_score: Score,
}

/// One completed turn of a recorded game, in player-A/player-B terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: Score,
    pub score_b: Score,
    pub cumulative_a: Score,
    pub cumulative_b: Score,
}

/// Full transcript of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub turns: Vec<TurnRecord>,
    pub score_a: Score,
    pub score_b: Score,
}

/// Run one game of `num_turns` turns and return the final totals,
/// order-correspondent to the two strategies.
///
/// Each turn both strategies are invoked against the histories as they stood
/// before the turn (A first, then B), the move pair is resolved through
/// `scores` in `(move_a, move_b)` order, and one [`Turn`] is appended to each
/// player's history. `num_turns == 0` yields `(0, 0)` without invoking either
/// strategy.
///
/// If resolution fails the game aborts: partial totals are discarded and
/// [`GameError::Aborted`] identifies the turn and the offending move pair.
pub fn run_game(
    strategy_a: &mut dyn Strategy,
    strategy_b: &mut dyn Strategy,
    scores: &dyn Payoff,
    num_turns: u32,
) -> Result<(Score, Score), GameError> {
    run_game_recorded(strategy_a, strategy_b, scores, num_turns)
        .map(|record| (record.score_a, record.score_b))
}

/// Like [`run_game`], but keeps the turn-by-turn transcript.
pub fn run_game_recorded(
    strategy_a: &mut dyn Strategy,
    strategy_b: &mut dyn Strategy,
    scores: &dyn Payoff,
    num_turns: u32,
) -> Result<GameRecord, GameError> {
    let mut history_a: Vec<Turn> = Vec::with_capacity(num_turns as usize);
    let mut history_b: Vec<Turn> = Vec::with_capacity(num_turns as usize);
    let mut turns: Vec<TurnRecord> = Vec::with_capacity(num_turns as usize);
    let mut total_a: Score = 0;
    let mut total_b: Score = 0;

    for turn in 0..num_turns {
        // Both strategies decide against a consistent pre-turn snapshot;
        // neither sees the other's move for this turn.
        let move_a = strategy_a.next_move(&history_a);
        let move_b = strategy_b.next_move(&history_b);

        let (score_a, score_b) = scores
            .resolve(move_a, move_b)
            .map_err(|source| GameError::Aborted { turn, source })?;
        total_a += score_a;
        total_b += score_b;
        trace!("turn {turn}: {move_a:?}/{move_b:?} -> {score_a}/{score_b}");

        turns.push(TurnRecord {
            turn,
            move_a,
            move_b,
            score_a,
            score_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });
        history_a.push(Turn {
            my_move: move_a,
            their_move: move_b,
            my_score: score_a,
            their_score: score_b,
        });
        history_b.push(Turn {
            my_move: move_b,
            their_move: move_a,
            my_score: score_b,
            their_score: score_a,
        });
    }

    Ok(GameRecord {
        turns,
        score_a: total_a,
        score_b: total_b,
    })
}
